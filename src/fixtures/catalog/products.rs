// fixtures/catalog/products.rs
//
// A small storefront catalog with realistic products: a few laptops and
// phones, one record with a numeric-looking discount and one without
// timestamps, mirroring what the live API returns.

use chrono::{TimeZone, Utc};

use crate::admin::model::{Attachment, Category, Product};
use crate::fixtures::CatalogFixture;

pub struct SampleCatalog;

impl SampleCatalog {
    /// A thumbnail-sized PNG header, enough for multipart tests
    pub fn thumbnail() -> Attachment {
        Attachment::new(
            "thumbnail.png",
            "image/png",
            vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a],
        )
    }

    pub fn gallery() -> Vec<Attachment> {
        vec![
            Attachment::new("front.jpg", "image/jpeg", vec![0xff, 0xd8, 0xff, 0xe0]),
            Attachment::new("back.jpg", "image/jpeg", vec![0xff, 0xd8, 0xff, 0xe1]),
        ]
    }
}

fn product(id: &str, title: &str, price: &str, discount: &str, brand: &str, category: &str) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} by {brand}"),
        price: price.to_string(),
        discount_percentage: discount.to_string(),
        brand: brand.to_string(),
        category: category.to_string(),
        thumbnail: format!("{id}-thumb.png"),
        images: vec![format!("{id}-1.png"), format!("{id}-2.png")],
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).single(),
        updated_at: None,
    }
}

impl CatalogFixture for SampleCatalog {
    fn products() -> Vec<Product> {
        vec![
            product("p1", "Old", "999", "10", "Lenovo", "Laptops"),
            product("p2", "MacBook Air 13 M3", "1299", "5", "Apple", "Laptops"),
            product("p3", "Galaxy S24", "899.99", "12.5", "Samsung", "Smartphones"),
            Product {
                created_at: None,
                ..product("p4", "Pixel Buds", "129", "0", "Google", "Accessories")
            },
        ]
    }

    fn categories() -> Vec<Category> {
        ["Laptops", "Smartphones", "Accessories"]
            .iter()
            .enumerate()
            .map(|(i, title)| Category {
                id: format!("c{}", i + 1),
                title: title.to_string(),
            })
            .collect()
    }
}
