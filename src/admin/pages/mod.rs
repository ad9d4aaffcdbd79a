// admin/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - ProductsPage: product management dashboard

pub mod products;

// Re-export page components
pub use products::ProductsPage;
