// common/mod.rs - Shared test utilities for the workflow tests
//
// FakeCatalogApi is an in-memory ProductApi:
// 1. Starts from the sample catalog (or any product list)
// 2. Records every call so tests can count requests
// 3. Can be told to fail a given operation with a server message

#![allow(dead_code)]

use std::sync::Mutex;

use storefront_admin::admin::api::ProductApi;
use storefront_admin::admin::model::{ApiMessage, Category, Product, ProductSubmission};
use storefront_admin::admin::AdminError;
use storefront_admin::fixtures::{CatalogFixture, SampleCatalog};

/// One request seen by the fake
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ListProducts,
    ListCategories,
    Create(ProductSubmission),
    Update(String, ProductSubmission),
    Delete(String),
}

/// Operations that can be made to fail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    ListProducts,
    ListCategories,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct State {
    products: Vec<Product>,
    categories: Vec<Category>,
    calls: Vec<Call>,
    failures: Vec<(Op, AdminError)>,
    next_id: usize,
}

pub struct FakeCatalogApi {
    state: Mutex<State>,
}

impl FakeCatalogApi {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            state: Mutex::new(State {
                products,
                categories,
                next_id: 100,
                ..State::default()
            }),
        }
    }

    /// The sample catalog: p1..p4 and three categories
    pub fn sample() -> Self {
        Self::new(SampleCatalog::products(), SampleCatalog::categories())
    }

    /// Fail `op` with `err` until cleared
    pub fn fail(&self, op: Op, err: AdminError) {
        self.state.lock().unwrap().failures.push((op, err));
    }

    /// Fail `op` with a 400 carrying `message`
    pub fn reject(&self, op: Op, message: &str) {
        self.fail(
            op,
            AdminError::Server { status: 400, message: Some(message.to_string()) },
        );
    }

    pub fn clear_failures(&self) {
        self.state.lock().unwrap().failures.clear();
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls()
            .iter()
            .filter(|call| {
                matches!(
                    (op, call),
                    (Op::ListProducts, Call::ListProducts)
                        | (Op::ListCategories, Call::ListCategories)
                        | (Op::Create, Call::Create(_))
                        | (Op::Update, Call::Update(..))
                        | (Op::Delete, Call::Delete(_))
                )
            })
            .count()
    }

    /// Number of mutating requests (create, update, delete)
    pub fn mutations(&self) -> usize {
        self.count(Op::Create) + self.count(Op::Update) + self.count(Op::Delete)
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        self.state.lock().unwrap().products.iter().find(|p| p.id == id).cloned()
    }

    fn record(&self, op: Op, call: Call) -> Result<(), AdminError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.failures.iter().find(|(failing, _)| *failing == op) {
            Some((_, err)) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn apply_draft(product: &mut Product, submission: &ProductSubmission) {
    let draft = &submission.draft;
    product.title = draft.title.clone();
    product.description = draft.description.clone();
    product.price = draft.price.clone();
    product.discount_percentage = draft.discount_percentage.clone();
    product.brand = draft.brand.clone();
    product.category = draft.category.clone();
    if let Some(thumbnail) = &submission.thumbnail {
        product.thumbnail = thumbnail.file_name.clone();
    }
    if !submission.images.is_empty() {
        product.images = submission.images.iter().map(|i| i.file_name.clone()).collect();
    }
}

impl ProductApi for FakeCatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, AdminError> {
        self.record(Op::ListProducts, Call::ListProducts)?;
        Ok(self.state.lock().unwrap().products.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AdminError> {
        self.record(Op::ListCategories, Call::ListCategories)?;
        Ok(self.state.lock().unwrap().categories.clone())
    }

    async fn create_product(&self, submission: &ProductSubmission) -> Result<ApiMessage, AdminError> {
        self.record(Op::Create, Call::Create(submission.clone()))?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let mut product = Product {
            id: format!("p{}", state.next_id),
            title: String::new(),
            description: String::new(),
            price: String::new(),
            discount_percentage: String::new(),
            brand: String::new(),
            category: String::new(),
            thumbnail: String::new(),
            images: Vec::new(),
            created_at: None,
            updated_at: None,
        };
        apply_draft(&mut product, submission);
        state.products.push(product);
        Ok(ApiMessage::new("Created"))
    }

    async fn update_product(&self, id: &str, submission: &ProductSubmission) -> Result<ApiMessage, AdminError> {
        self.record(Op::Update, Call::Update(id.to_string(), submission.clone()))?;
        let mut state = self.state.lock().unwrap();
        match state.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                apply_draft(product, submission);
                Ok(ApiMessage::new("Updated"))
            }
            None => Err(AdminError::Server {
                status: 404,
                message: Some("Product not found".to_string()),
            }),
        }
    }

    async fn delete_product(&self, id: &str) -> Result<ApiMessage, AdminError> {
        self.record(Op::Delete, Call::Delete(id.to_string()))?;
        let mut state = self.state.lock().unwrap();
        state.products.retain(|p| p.id != id);
        Ok(ApiMessage::new("Deleted"))
    }
}
