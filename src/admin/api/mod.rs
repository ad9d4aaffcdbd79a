// admin/api/mod.rs - Contract for talking to the storefront REST API
//
// The workflow is generic over ProductApi so tests can swap in an in-memory
// catalog and the UI can use the reqwest client on both server and WASM.

use std::future::Future;

use crate::admin::error::AdminError;
use crate::admin::model::{ApiMessage, Category, Product, ProductSubmission};

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "ssr")]
pub mod settings;

#[cfg(feature = "client")]
pub use client::HttpProductApi;

/// Remote product collection
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded executor.
pub trait ProductApi {
    /// Full product collection
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, AdminError>>;

    /// Valid category labels
    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, AdminError>>;

    /// Create a product from the draft fields and both attachments
    fn create_product(
        &self,
        submission: &ProductSubmission,
    ) -> impl Future<Output = Result<ApiMessage, AdminError>>;

    /// Update product `id`; attachments are sent only when present
    fn update_product(
        &self,
        id: &str,
        submission: &ProductSubmission,
    ) -> impl Future<Output = Result<ApiMessage, AdminError>>;

    fn delete_product(&self, id: &str) -> impl Future<Output = Result<ApiMessage, AdminError>>;
}
