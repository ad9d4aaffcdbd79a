// admin/workflow.rs - Product management workflow
//
// ProductWorkflow owns the form draft, the edit mode, the last fetched
// product list and the staged attachments. Transitions are synchronous so a
// reactive UI can drive them from signals; the async methods at the bottom
// run a full operation against any ProductApi.
//
// The product list is never edited locally: after every successful
// mutation the caller re-fetches it.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::admin::api::ProductApi;
use crate::admin::error::AdminError;
use crate::admin::model::*;

/// Prompt shown before a product is deleted
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

/// Asks the operator to confirm a destructive action
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Identifies the single mutation allowed in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestToken(Uuid);

impl RequestToken {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A validated create/update ready to be sent
#[derive(Clone, Debug)]
pub struct SubmitTicket {
    pub token: RequestToken,
    pub submission: ProductSubmission,
}

impl SubmitTicket {
    /// Issue the create or update call this ticket describes
    pub async fn send<A: ProductApi>(&self, api: &A) -> Result<ApiMessage, AdminError> {
        match &self.submission.target {
            SubmitTarget::Create => api.create_product(&self.submission).await,
            SubmitTarget::Update(id) => api.update_product(id, &self.submission).await,
        }
    }
}

/// A delete ready to be sent
#[derive(Clone, Debug)]
pub struct RemoveTicket {
    pub token: RequestToken,
    pub id: String,
}

impl RemoveTicket {
    pub async fn send<A: ProductApi>(&self, api: &A) -> Result<ApiMessage, AdminError> {
        api.delete_product(&self.id).await
    }
}

/// Result of [`ProductWorkflow::remove`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The operator declined; nothing was sent
    Cancelled,
    /// Deleted; carries the server's message
    Removed(Option<String>),
}

#[derive(Clone, Debug, Default)]
pub struct ProductWorkflow {
    draft: ProductDraft,
    mode: WorkflowMode,
    products: Option<Vec<Product>>,
    categories: Option<Vec<Category>>,
    pending: PendingImageSet,
    status: Status,
    products_stale: bool,
    categories_stale: bool,
    in_flight: Option<RequestToken>,
}

impl ProductWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn mode(&self) -> &WorkflowMode {
        &self.mode
    }

    pub fn products(&self) -> Option<&[Product]> {
        self.products.as_deref()
    }

    pub fn categories(&self) -> Option<&[Category]> {
        self.categories.as_deref()
    }

    pub fn pending(&self) -> &PendingImageSet {
        &self.pending
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Last product fetch failed; the list shown is from an earlier fetch
    pub fn products_stale(&self) -> bool {
        self.products_stale
    }

    pub fn categories_stale(&self) -> bool {
        self.categories_stale
    }

    /// A create/update/delete is waiting for the server
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    // ----- form editing -----

    pub fn update_field(&mut self, field: ProductField, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    /// Same as [`update_field`](Self::update_field), keyed by the input's name
    pub fn update_field_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), AdminError> {
        let field: ProductField = name.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn select_thumbnail(&mut self, file: Attachment) {
        self.pending.thumbnail = Some(file);
    }

    /// The thumbnail picker was closed without a file
    pub fn clear_thumbnail(&mut self) {
        self.pending.thumbnail = None;
    }

    pub fn select_images(&mut self, files: Vec<Attachment>) {
        self.pending.images = Some(files);
    }

    /// Switch to editing `id`. Returns false, changing nothing, when the id
    /// is not in the current list.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(product) = self.products.iter().flatten().find(|p| p.id == id) else {
            debug!(id, "Edit requested for a product missing from the list");
            return false;
        };
        self.draft = ProductDraft::from_product(product);
        self.mode = WorkflowMode::Edit(id.to_string());
        self.pending.clear();
        true
    }

    /// Leave edit mode and start over with an empty draft
    pub fn cancel_edit(&mut self) {
        self.mode = WorkflowMode::Create;
        self.draft = ProductDraft::default();
        self.pending.clear();
    }

    pub fn dismiss_status(&mut self) {
        self.status.dismiss();
    }

    /// Show an error that happened outside a submit/remove, e.g. while
    /// reading a selected file
    pub fn report_error(&mut self, err: &AdminError) {
        self.status.err = Some(err.banner_message());
    }

    // ----- list synchronisation -----

    pub fn begin_category_load(&mut self) {
        self.status.is_loading = true;
    }

    /// Store the category lookup result. The loading flag clears either way.
    pub fn apply_categories(&mut self, result: Result<Vec<Category>, AdminError>) {
        match result {
            Ok(categories) => {
                self.categories = Some(categories);
                self.categories_stale = false;
            }
            Err(err) => {
                warn!(error = %err, "Failed to load categories");
                self.categories_stale = true;
            }
        }
        self.status.is_loading = false;
    }

    /// Replace the product list with a fresh fetch. On failure the old list
    /// stays and is flagged stale.
    pub fn apply_products(&mut self, result: Result<Vec<Product>, AdminError>) {
        match result {
            Ok(products) => {
                debug!(count = products.len(), "Products loaded");
                self.products = Some(products);
                self.products_stale = false;
            }
            Err(err) => {
                warn!(error = %err, "Failed to load products");
                self.products_stale = true;
            }
        }
    }

    // ----- mutations -----

    fn claim(&mut self) -> Result<RequestToken, AdminError> {
        if self.in_flight.is_some() {
            debug!("Rejected mutation while another request is in flight");
            return Err(AdminError::Busy);
        }
        let token = RequestToken::new();
        self.in_flight = Some(token);
        Ok(token)
    }

    fn release(&mut self, token: RequestToken) -> Result<(), AdminError> {
        if self.in_flight != Some(token) {
            debug!(?token, "Ignoring response for a request that is not in flight");
            return Err(AdminError::StaleRequest);
        }
        self.in_flight = None;
        Ok(())
    }

    /// Validate the form and build the create/update request.
    ///
    /// In create mode both a thumbnail and at least one image are required;
    /// without them the error banner is set and no ticket is issued.
    pub fn prepare_submit(&mut self) -> Result<SubmitTicket, AdminError> {
        if self.in_flight.is_some() {
            debug!("Rejected submit while another request is in flight");
            return Err(AdminError::Busy);
        }
        self.status.is_loading = true;

        let (target, thumbnail, images) = match &self.mode {
            WorkflowMode::Edit(id) => (
                SubmitTarget::Update(id.clone()),
                self.pending.thumbnail.clone(),
                self.pending.images.clone().unwrap_or_default(),
            ),
            WorkflowMode::Create => {
                if !self.pending.is_complete() {
                    self.status.err = Some(AdminError::MissingAttachments.banner_message());
                    self.status.is_loading = false;
                    return Err(AdminError::MissingAttachments);
                }
                (
                    SubmitTarget::Create,
                    self.pending.thumbnail.clone(),
                    self.pending.images.clone().unwrap_or_default(),
                )
            }
        };

        let token = self.claim()?;
        Ok(SubmitTicket {
            token,
            submission: ProductSubmission {
                target,
                draft: self.draft.clone(),
                thumbnail,
                images,
            },
        })
    }

    /// Apply the server's answer to a submit.
    ///
    /// Success resets the form and leaves edit mode; the caller must then
    /// refresh the product list. Returns the server's message.
    pub fn complete_submit(
        &mut self,
        token: RequestToken,
        result: Result<ApiMessage, AdminError>,
    ) -> Result<Option<String>, AdminError> {
        self.release(token)?;
        self.status.is_loading = false;

        match result {
            Ok(reply) => {
                info!(message = ?reply.message, "Product saved");
                self.status.success_msg = reply.message.clone();
                if self.mode.is_edit() {
                    self.mode = WorkflowMode::Create;
                }
                self.draft = ProductDraft::default();
                self.pending.clear();
                self.status.err = None;
                Ok(reply.message)
            }
            Err(err) => {
                self.status.err = err.server_message();
                Err(err)
            }
        }
    }

    /// Claim the in-flight slot for a delete. Confirmation happens before this.
    pub fn prepare_remove(&mut self, id: &str) -> Result<RemoveTicket, AdminError> {
        let token = self.claim()?;
        Ok(RemoveTicket { token, id: id.to_string() })
    }

    /// Apply the server's answer to a delete; on success refresh the list
    pub fn complete_remove(
        &mut self,
        token: RequestToken,
        result: Result<ApiMessage, AdminError>,
    ) -> Result<Option<String>, AdminError> {
        self.release(token)?;

        match result {
            Ok(reply) => {
                info!(message = ?reply.message, "Product deleted");
                self.status.success_msg = reply.message.clone();
                self.status.err = None;
                Ok(reply.message)
            }
            Err(err) => {
                self.status.err = err.server_message();
                Err(err)
            }
        }
    }

    // ----- async drivers -----

    /// Initial load: categories, then products
    pub async fn mount<A: ProductApi>(&mut self, api: &A) {
        self.load_categories(api).await;
        self.load_products(api).await;
    }

    pub async fn load_products<A: ProductApi>(&mut self, api: &A) {
        let result = api.list_products().await;
        self.apply_products(result);
    }

    pub async fn load_categories<A: ProductApi>(&mut self, api: &A) {
        self.begin_category_load();
        let result = api.list_categories().await;
        self.apply_categories(result);
    }

    /// Create or update, then resync the list once on success
    pub async fn submit<A: ProductApi>(&mut self, api: &A) -> Result<Option<String>, AdminError> {
        let ticket = self.prepare_submit()?;
        let result = ticket.send(api).await;
        let message = self.complete_submit(ticket.token, result)?;
        self.load_products(api).await;
        Ok(message)
    }

    /// Confirm, delete `id`, then resync the list on success
    pub async fn remove<A, C>(&mut self, api: &A, confirm: &C, id: &str) -> Result<RemoveOutcome, AdminError>
    where
        A: ProductApi,
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(RemoveOutcome::Cancelled);
        }
        let ticket = self.prepare_remove(id)?;
        let result = ticket.send(api).await;
        let message = self.complete_remove(ticket.token, result)?;
        self.load_products(api).await;
        Ok(RemoveOutcome::Removed(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, title: &str) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            description: "desc".to_string(),
            price: "10".to_string(),
            discount_percentage: "0".to_string(),
            brand: "Acme".to_string(),
            category: "Phones".to_string(),
            thumbnail: "t.png".to_string(),
            images: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    fn attachment(name: &str) -> Attachment {
        Attachment::new(name, "image/png", vec![1, 2, 3])
    }

    #[test]
    fn test_new_workflow_is_idle() {
        let workflow = ProductWorkflow::new();
        assert_eq!(workflow.mode(), &WorkflowMode::Create);
        assert_eq!(workflow.draft(), &ProductDraft::default());
        assert!(workflow.products().is_none());
        assert!(!workflow.status().is_loading);
        assert!(!workflow.is_busy());
    }

    #[test]
    fn test_update_field_named_rejects_unknown() {
        let mut workflow = ProductWorkflow::new();
        workflow.update_field_named("brand", "Acme").unwrap();
        assert_eq!(workflow.draft().brand, "Acme");
        assert!(matches!(
            workflow.update_field_named("sku", "1"),
            Err(AdminError::UnknownField(_))
        ));
    }

    #[test]
    fn test_selection_replaces_previous() {
        let mut workflow = ProductWorkflow::new();
        workflow.select_images(vec![attachment("a.png"), attachment("b.png")]);
        workflow.select_images(vec![attachment("c.png")]);
        let images = workflow.pending().images.as_ref().unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].file_name, "c.png");
    }

    #[test]
    fn test_empty_thumbnail_pick_clears_slot() {
        let mut workflow = ProductWorkflow::new();
        workflow.select_thumbnail(attachment("t.png"));
        workflow.select_images(vec![attachment("a.png")]);
        assert!(workflow.pending().is_complete());

        workflow.clear_thumbnail();

        assert!(workflow.pending().thumbnail.is_none());
        assert!(!workflow.pending().is_complete());
        assert_eq!(workflow.prepare_submit().unwrap_err(), AdminError::MissingAttachments);
    }

    #[test]
    fn test_begin_edit_unknown_id_is_noop() {
        let mut workflow = ProductWorkflow::new();
        workflow.apply_products(Ok(vec![product("p1", "Old")]));
        workflow.update_field(ProductField::Title, "typing");
        let before = workflow.clone();

        assert!(!workflow.begin_edit("missing"));
        assert_eq!(workflow.mode(), before.mode());
        assert_eq!(workflow.draft(), before.draft());
    }

    #[test]
    fn test_begin_edit_copies_fields() {
        let mut workflow = ProductWorkflow::new();
        workflow.apply_products(Ok(vec![product("p1", "Old")]));
        assert!(workflow.begin_edit("p1"));
        assert_eq!(workflow.mode(), &WorkflowMode::Edit("p1".to_string()));
        assert_eq!(workflow.draft().title, "Old");
        assert_eq!(workflow.draft().category, "Phones");
    }

    #[test]
    fn test_busy_guard_blocks_second_submit() {
        let mut workflow = ProductWorkflow::new();
        workflow.select_thumbnail(attachment("t.png"));
        workflow.select_images(vec![attachment("a.png")]);

        let ticket = workflow.prepare_submit().unwrap();
        assert!(workflow.is_busy());
        assert_eq!(workflow.prepare_submit().unwrap_err(), AdminError::Busy);
        assert_eq!(workflow.prepare_remove("p1").unwrap_err(), AdminError::Busy);

        workflow.complete_submit(ticket.token, Ok(ApiMessage::new("Created"))).unwrap();
        assert!(!workflow.is_busy());
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut workflow = ProductWorkflow::new();
        let ticket = workflow.prepare_remove("p1").unwrap();
        let stranger = RequestToken::new();

        let result = workflow.complete_remove(stranger, Ok(ApiMessage::new("Deleted")));
        assert_eq!(result.unwrap_err(), AdminError::StaleRequest);
        assert!(workflow.is_busy());
        assert!(workflow.status().success_msg.is_none());

        workflow.complete_remove(ticket.token, Ok(ApiMessage::new("Deleted"))).unwrap();
        assert!(!workflow.is_busy());
    }

    #[test]
    fn test_failed_product_load_keeps_list() {
        let mut workflow = ProductWorkflow::new();
        workflow.apply_products(Ok(vec![product("p1", "Old")]));
        workflow.apply_products(Err(AdminError::Transport("refused".to_string())));
        assert_eq!(workflow.products().unwrap().len(), 1);
        assert!(workflow.products_stale());
        assert!(workflow.status().err.is_none());
    }

    #[test]
    fn test_category_load_clears_loading_on_failure() {
        let mut workflow = ProductWorkflow::new();
        workflow.begin_category_load();
        assert!(workflow.status().is_loading);
        workflow.apply_categories(Err(AdminError::Server { status: 500, message: None }));
        assert!(!workflow.status().is_loading);
        assert!(workflow.categories_stale());
        assert!(workflow.categories().is_none());
    }

    #[test]
    fn test_closure_confirm() {
        let yes = |_: &str| true;
        assert!(yes.confirm(DELETE_PROMPT));
    }
}
