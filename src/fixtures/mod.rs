// fixtures/mod.rs - Test fixtures module
//
// A fixture is reusable setup data. Unit tests, the in-memory fake API and
// the wiremock-backed client tests all start from the same sample catalog
// instead of building products by hand.

pub mod catalog;

pub use catalog::SampleCatalog;

use crate::admin::model::{Category, Product, ProductsEnvelope};

/// A catalog fixture: products and categories plus their wire bodies
pub trait CatalogFixture {
    fn products() -> Vec<Product>;

    fn categories() -> Vec<Category>;

    /// JSON body of `GET products`
    fn products_body() -> serde_json::Value {
        serde_json::to_value(ProductsEnvelope { data: Self::products() })
            .unwrap_or(serde_json::Value::Null)
    }

    /// JSON body of `GET categories` (bare array)
    fn categories_body() -> serde_json::Value {
        serde_json::to_value(Self::categories()).unwrap_or(serde_json::Value::Null)
    }
}
