// admin/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Spinner, FailurePanel, FormButton, StatusBanner, StaleNotice
// - form.rs: The product create/edit form and attachment previews
// - product.rs: Product display components (ProductCard, ProductGrid)

pub mod common;
pub mod form;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use form::*;
pub use product::*;
