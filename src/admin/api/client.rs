// admin/api/client.rs - reqwest implementation of ProductApi
//
// Works natively (SSR server, catalog_check) and in the browser, where
// reqwest rides on fetch. Create/update go out as multipart forms.

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use tracing::{debug, info, warn};

use super::ProductApi;
use crate::admin::config::AdminConfig;
use crate::admin::error::AdminError;
use crate::admin::model::{
    ApiMessage, Attachment, CategoriesBody, Category, Product, ProductSubmission, ProductsEnvelope,
};

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        // fetch has no per-client timeout
        fn client_builder(_timeout_secs: u64) -> reqwest::ClientBuilder {
            reqwest::Client::builder()
        }
    } else {
        fn client_builder(timeout_secs: u64) -> reqwest::ClientBuilder {
            reqwest::Client::builder().timeout(std::time::Duration::from_secs(timeout_secs))
        }
    }
}

/// HTTP client for the storefront product endpoints
#[derive(Clone, Debug)]
pub struct HttpProductApi {
    client: reqwest::Client,
    config: AdminConfig,
}

impl HttpProductApi {
    pub fn new(config: AdminConfig) -> Result<Self, AdminError> {
        let client = client_builder(config.timeout_secs)
            .build()
            .map_err(|e| AdminError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Attach the bearer token, send, and turn non-2xx responses into errors
    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<Response, AdminError> {
        let request = match &self.config.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint, error = %e, "Storefront API unreachable");
                AdminError::Transport(format!("{endpoint}: {e}"))
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiMessage>(&body)
            .ok()
            .and_then(|m| m.message);
        warn!(endpoint, status = status.as_u16(), ?message, "Storefront API rejected request");
        Err(AdminError::Server { status: status.as_u16(), message })
    }

    async fn read_message(response: Response, endpoint: &str) -> Result<ApiMessage, AdminError> {
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(ApiMessage::default());
        }
        serde_json::from_str(&body).map_err(|e| AdminError::Decode(format!("{endpoint}: {e}")))
    }
}

fn file_part(attachment: &Attachment) -> Result<Part, AdminError> {
    Part::bytes(attachment.bytes.clone())
        .file_name(attachment.file_name.clone())
        .mime_str(&attachment.content_type)
        .map_err(|e| AdminError::Attachment(format!("{}: {e}", attachment.file_name)))
}

/// Multipart body: the six scalar fields, then `thumbnail`, then one
/// `images` part per gallery image
pub fn build_form(submission: &ProductSubmission) -> Result<Form, AdminError> {
    let mut form = submission
        .draft
        .fields()
        .fold(Form::new(), |form, (field, value)| form.text(field.name(), value.to_string()));

    if let Some(thumbnail) = &submission.thumbnail {
        form = form.part("thumbnail", file_part(thumbnail)?);
    }
    for image in &submission.images {
        form = form.part("images", file_part(image)?);
    }
    Ok(form)
}

impl ProductApi for HttpProductApi {
    async fn list_products(&self) -> Result<Vec<Product>, AdminError> {
        let url = self.config.products_url();
        debug!(%url, "Fetching products");
        let response = self.send(self.client.get(&url), "list_products").await?;
        let envelope: ProductsEnvelope = response.json().await?;
        Ok(envelope.data)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AdminError> {
        let url = self.config.categories_url();
        debug!(%url, "Fetching categories");
        let response = self.send(self.client.get(&url), "list_categories").await?;
        let body: CategoriesBody = response.json().await?;
        Ok(body.into_categories())
    }

    async fn create_product(&self, submission: &ProductSubmission) -> Result<ApiMessage, AdminError> {
        let url = self.config.create_url();
        info!(title = %submission.draft.title, images = submission.images.len(), "Creating product");
        let form = build_form(submission)?;
        let response = self
            .send(self.client.post(&url).multipart(form), "create_product")
            .await?;
        Self::read_message(response, "create_product").await
    }

    async fn update_product(
        &self,
        id: &str,
        submission: &ProductSubmission,
    ) -> Result<ApiMessage, AdminError> {
        let url = self.config.update_url(id);
        info!(id, title = %submission.draft.title, "Updating product");
        let form = build_form(submission)?;
        let response = self
            .send(self.client.put(&url).multipart(form), "update_product")
            .await?;
        Self::read_message(response, "update_product").await
    }

    async fn delete_product(&self, id: &str) -> Result<ApiMessage, AdminError> {
        let url = self.config.delete_url(id);
        info!(id, "Deleting product");
        let response = self.send(self.client.delete(&url), "delete_product").await?;
        Self::read_message(response, "delete_product").await
    }
}
