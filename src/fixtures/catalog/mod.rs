// fixtures/catalog/mod.rs
//
// Sample catalog definitions. Each catalog is a unit struct implementing
// CatalogFixture so tests can pick one by type.

pub mod products;

pub use products::SampleCatalog;
