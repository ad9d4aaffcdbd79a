// admin/mod.rs - Root module for the storefront admin dashboard
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - error.rs / config.rs / format.rs: ambient pieces with no framework deps
// - api/: the ProductApi contract and its reqwest implementation
// - workflow.rs: the product management state machine
// - server_fns.rs: server function declarations (both client and server)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod error;
pub mod config;
pub mod format;
pub mod api;
pub mod workflow;

// Server function declarations - must be available to both client and server
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

pub use error::AdminError;
pub use workflow::ProductWorkflow;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
