// admin/format.rs - Display helpers shared by the components
//
// Kept free of Leptos so the formatting rules can be tested without a
// reactive runtime.

use crate::admin::model::Product;

/// Characters of a title shown on a product card
pub const CARD_TITLE_CHARS: usize = 15;

/// Human readable attachment size: kilobytes below 900 kb, megabytes above
pub fn file_size_label(bytes: usize) -> String {
    let kb = bytes as f64 / 1024.0;
    if kb < 900.0 {
        format!("{:.2} kb", kb)
    } else {
        format!("{:.2} mb", kb / 1024.0)
    }
}

/// First `max_chars` characters of `text`, on a char boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn card_title(product: &Product) -> &str {
    truncate_chars(&product.title, CARD_TITLE_CHARS)
}

pub fn price_label(product: &Product) -> String {
    format!("${}", product.price)
}

pub fn discount_label(product: &Product) -> String {
    format!("{}% off", product.discount_percentage)
}

/// "$x.xx" after discount, if the price and discount are numeric
pub fn sale_price_label(product: &Product) -> Option<String> {
    product.sale_price().map(|price| format!("${:.2}", price))
}
