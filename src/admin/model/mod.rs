// admin/model/mod.rs - Shared data models for client and server
//
// These structs are used by the workflow, the HTTP client and the Leptos
// components. Field names on the wire follow the storefront API (camelCase,
// MongoDB style `_id`).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::admin::error::AdminError;

/// Category preselected in an empty draft
pub const DEFAULT_CATEGORY: &str = "Laptops";

/// Editable scalar fields of a product form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductField {
    Title,
    Description,
    Price,
    DiscountPercentage,
    Brand,
    Category,
}

impl ProductField {
    /// Every scalar field, in multipart order
    pub const ALL: [ProductField; 6] = [
        ProductField::Title,
        ProductField::Description,
        ProductField::Price,
        ProductField::DiscountPercentage,
        ProductField::Brand,
        ProductField::Category,
    ];

    /// Fields rendered as free-text inputs (category is a select)
    pub const TEXT_INPUTS: [ProductField; 5] = [
        ProductField::Title,
        ProductField::Description,
        ProductField::Price,
        ProductField::DiscountPercentage,
        ProductField::Brand,
    ];

    /// Form/multipart name of the field
    pub fn name(self) -> &'static str {
        match self {
            ProductField::Title => "title",
            ProductField::Description => "description",
            ProductField::Price => "price",
            ProductField::DiscountPercentage => "discountPercentage",
            ProductField::Brand => "brand",
            ProductField::Category => "category",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ProductField::Title => "product title",
            ProductField::Description => "product description",
            ProductField::Price => "product price",
            ProductField::DiscountPercentage => "product discountPercentage",
            ProductField::Brand => "product brand",
            ProductField::Category => "product category",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProductField {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| AdminError::UnknownField(s.to_string()))
    }
}

/// Current contents of the product form
///
/// Price and discount stay free text; the server does the validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub discount_percentage: String,
    pub brand: String,
    pub category: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: String::new(),
            discount_percentage: String::new(),
            brand: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl ProductDraft {
    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::Title => &self.title,
            ProductField::Description => &self.description,
            ProductField::Price => &self.price,
            ProductField::DiscountPercentage => &self.discount_percentage,
            ProductField::Brand => &self.brand,
            ProductField::Category => &self.category,
        }
    }

    pub fn set(&mut self, field: ProductField, value: String) {
        let slot = match field {
            ProductField::Title => &mut self.title,
            ProductField::Description => &mut self.description,
            ProductField::Price => &mut self.price,
            ProductField::DiscountPercentage => &mut self.discount_percentage,
            ProductField::Brand => &mut self.brand,
            ProductField::Category => &mut self.category,
        };
        *slot = value;
    }

    /// Copy the scalar fields of a persisted product
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
            discount_percentage: product.discount_percentage.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
        }
    }

    /// (field, value) pairs in multipart order
    pub fn fields(&self) -> impl Iterator<Item = (ProductField, &str)> + '_ {
        ProductField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

/// Product as persisted by the storefront API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProductWire")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub discount_percentage: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    /// Image file name, resolved against the image base URL
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Price after discount, when both values parse as decimals
    pub fn sale_price(&self) -> Option<Decimal> {
        let price = Decimal::from_str(self.price.trim()).ok()?;
        let discount = Decimal::from_str(self.discount_percentage.trim()).ok()?;
        if discount.is_sign_negative() || discount > Decimal::ONE_HUNDRED {
            return None;
        }
        let factor = (Decimal::ONE_HUNDRED - discount) / Decimal::ONE_HUNDRED;
        Some((price * factor).round_dp(2))
    }
}

// Records may carry `_id`, `id` or both; `_id` wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductWire {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default, deserialize_with = "string_or_number")]
    price: String,
    #[serde(default, deserialize_with = "string_or_number")]
    discount_percentage: String,
    #[serde(default)]
    brand: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    thumbnail: String,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ProductWire> for Product {
    type Error = String;

    fn try_from(wire: ProductWire) -> Result<Self, Self::Error> {
        let id = wire
            .mongo_id
            .or(wire.id)
            .ok_or_else(|| format!("product {:?} has neither _id nor id", wire.title))?;
        Ok(Product {
            id,
            title: wire.title,
            description: wire.description,
            price: wire.price,
            discount_percentage: wire.discount_percentage,
            brand: wire.brand,
            category: wire.category,
            thumbnail: wire.thumbnail,
            images: wire.images,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        })
    }
}

// The API stores numbers but older records carry strings; the form only
// ever deals in text.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => text,
        Some(Raw::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

/// Category label offered by the category lookup
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CategoryWire")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
}

#[derive(Deserialize)]
struct CategoryWire {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    title: String,
}

impl From<CategoryWire> for Category {
    fn from(wire: CategoryWire) -> Self {
        Category {
            id: wire.mongo_id.or(wire.id).unwrap_or_default(),
            title: wire.title,
        }
    }
}

/// Body of `GET products`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductsEnvelope {
    pub data: Vec<Product>,
}

/// Body of `GET categories`: either a bare array or wrapped in `data`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoriesBody {
    Bare(Vec<Category>),
    Wrapped { data: Vec<Category> },
}

impl CategoriesBody {
    pub fn into_categories(self) -> Vec<Category> {
        match self {
            CategoriesBody::Bare(categories) => categories,
            CategoriesBody::Wrapped { data } => data,
        }
    }
}

/// `{ message }` body returned by mutations and most errors
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }
}

/// Binary file staged locally before upload
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let content_type = content_type.into();
        Self {
            file_name: file_name.into(),
            content_type: if content_type.is_empty() {
                "application/octet-stream".to_string()
            } else {
                content_type
            },
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn summary(&self) -> AttachmentSummary {
        AttachmentSummary {
            file_name: self.file_name.clone(),
            size: self.bytes.len(),
        }
    }
}

/// Name and size of a staged file, for previews
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentSummary {
    pub file_name: String,
    pub size: usize,
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Attachments selected but not yet uploaded
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingImageSet {
    pub thumbnail: Option<Attachment>,
    pub images: Option<Vec<Attachment>>,
}

impl PendingImageSet {
    /// Both slots filled, with at least one gallery image
    pub fn is_complete(&self) -> bool {
        self.thumbnail.is_some() && self.images.as_ref().is_some_and(|images| !images.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.thumbnail.is_none() && self.images.is_none()
    }

    pub fn clear(&mut self) {
        self.thumbnail = None;
        self.images = None;
    }
}

/// Which operation the form submits
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowMode {
    #[default]
    Create,
    Edit(String),
}

impl WorkflowMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, WorkflowMode::Edit(_))
    }

    pub fn editing_id(&self) -> Option<&str> {
        match self {
            WorkflowMode::Edit(id) => Some(id),
            WorkflowMode::Create => None,
        }
    }

    /// Label of the submit button
    pub fn submit_label(&self) -> &'static str {
        match self {
            WorkflowMode::Create => "Add",
            WorkflowMode::Edit(_) => "Update",
        }
    }
}

/// Loading flag and banner messages shown by the presentation layer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub is_loading: bool,
    pub success_msg: Option<String>,
    pub err: Option<String>,
}

impl Status {
    pub fn dismiss(&mut self) {
        self.success_msg = None;
        self.err = None;
    }

    pub fn has_message(&self) -> bool {
        self.success_msg.is_some() || self.err.is_some()
    }

    /// Text of the banner currently on screen; errors take precedence
    pub fn shown_message(&self) -> Option<&str> {
        self.err.as_deref().or(self.success_msg.as_deref())
    }
}

/// Destination of a form submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(String),
}

/// Everything the API client needs to send a create or update request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductSubmission {
    pub target: SubmitTarget,
    pub draft: ProductDraft,
    pub thumbnail: Option<Attachment>,
    pub images: Vec<Attachment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_default() {
        let draft = ProductDraft::default();
        assert_eq!(draft.category, DEFAULT_CATEGORY);
        assert!(draft.title.is_empty());
        assert!(draft.price.is_empty());
    }

    #[test]
    fn test_field_names_parse_back() {
        for field in ProductField::ALL {
            assert_eq!(field.name().parse::<ProductField>().unwrap(), field);
        }
        assert_eq!(
            "colour".parse::<ProductField>(),
            Err(AdminError::UnknownField("colour".to_string()))
        );
    }

    #[test]
    fn test_draft_set_and_get() {
        let mut draft = ProductDraft::default();
        draft.set(ProductField::DiscountPercentage, "15".to_string());
        assert_eq!(draft.get(ProductField::DiscountPercentage), "15");
        assert_eq!(draft.discount_percentage, "15");
    }

    #[test]
    fn test_product_accepts_numeric_price() {
        let json = r#"{
            "_id": "p1",
            "title": "Phone",
            "description": "d",
            "price": 100,
            "discountPercentage": 5.5,
            "brand": "X",
            "category": "Laptops",
            "thumbnail": "thumb.png",
            "images": ["a.png", "b.png"],
            "createdAt": "2024-03-01T10:00:00Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.price, "100");
        assert_eq!(product.discount_percentage, "5.5");
        assert_eq!(product.images.len(), 2);
        assert!(product.created_at.is_some());
    }

    #[test]
    fn test_product_with_both_ids_prefers_mongo_id() {
        let both: Product =
            serde_json::from_str(r#"{"_id": "p1", "id": "legacy-1", "title": "T"}"#).unwrap();
        assert_eq!(both.id, "p1");

        let plain: Product = serde_json::from_str(r#"{"id": "p2", "title": "T"}"#).unwrap();
        assert_eq!(plain.id, "p2");

        let missing = serde_json::from_str::<Product>(r#"{"title": "T"}"#).unwrap_err();
        assert!(missing.to_string().contains("neither _id nor id"));

        // serialized form keeps the storefront's `_id`
        let json = serde_json::to_value(&both).unwrap();
        assert_eq!(json["_id"], "p1");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_category_with_both_ids() {
        let category: Category =
            serde_json::from_str(r#"{"_id": "c1", "id": "c1", "title": "Laptops"}"#).unwrap();
        assert_eq!(category.id, "c1");

        let bare: Category = serde_json::from_str(r#"{"title": "Phones"}"#).unwrap();
        assert_eq!(bare.id, "");
    }

    #[test]
    fn test_shown_message_prefers_error() {
        let mut status = Status::default();
        assert_eq!(status.shown_message(), None);
        status.success_msg = Some("Saved".to_string());
        assert_eq!(status.shown_message(), Some("Saved"));
        status.err = Some("Title is required".to_string());
        assert_eq!(status.shown_message(), Some("Title is required"));
        status.dismiss();
        assert_eq!(status.shown_message(), None);
    }

    #[test]
    fn test_sale_price() {
        let json = r#"{"_id": "p1", "title": "Phone", "price": "200", "discountPercentage": "25"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.sale_price(), Some(Decimal::from(150)));

        let mut broken = product.clone();
        broken.price = "n/a".to_string();
        assert_eq!(broken.sale_price(), None);
    }

    #[test]
    fn test_pending_completeness() {
        let mut pending = PendingImageSet::default();
        assert!(pending.is_empty());
        pending.thumbnail = Some(Attachment::new("t.png", "image/png", vec![1]));
        assert!(!pending.is_complete());
        pending.images = Some(vec![]);
        assert!(!pending.is_complete());
        pending.images = Some(vec![Attachment::new("a.png", "image/png", vec![2])]);
        assert!(pending.is_complete());
        pending.clear();
        assert!(pending.is_empty());
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(WorkflowMode::default(), WorkflowMode::Create);
        assert_eq!(WorkflowMode::Create.submit_label(), "Add");
        let edit = WorkflowMode::Edit("p1".to_string());
        assert_eq!(edit.submit_label(), "Update");
        assert_eq!(edit.editing_id(), Some("p1"));
    }

    #[test]
    fn test_attachment_debug_hides_bytes() {
        let attachment = Attachment::new("t.png", "", vec![0; 2048]);
        assert_eq!(attachment.content_type, "application/octet-stream");
        let debug = format!("{:?}", attachment);
        assert!(debug.contains("size: 2048"));
    }

    #[test]
    fn test_attachment_summary() {
        let attachment = Attachment::new("gallery-1.jpg", "image/jpeg", vec![7; 1536]);
        assert_eq!(
            attachment.summary(),
            AttachmentSummary { file_name: "gallery-1.jpg".to_string(), size: 1536 }
        );
    }
}
