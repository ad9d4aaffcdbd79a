// admin/pages/products.rs - Product management page
//
// Fetches the session config from the server, then wires a ProductWorkflow
// signal to the storefront API: load on mount, submit, edit, delete and
// resync after every successful mutation.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::api::{HttpProductApi, ProductApi};
use crate::admin::components::*;
use crate::admin::config::AdminConfig;
use crate::admin::server_fns::session_config;
use crate::admin::workflow::{Confirm, ProductWorkflow, DELETE_PROMPT};

/// How long success and error banners stay up
pub const STATUS_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Products dashboard page
#[component]
pub fn ProductsPage() -> impl IntoView {
    let session = Resource::new(|| (), |_| session_config());

    view! {
        <div class="w-full flex flex-col items-center p-10">
            <h1 class="text-2xl font-bold max-md:text-sm mb-4">"Products"</h1>
            <Suspense fallback=move || view! { <Spinner label="Connecting..." /> }>
                {move || {
                    session.get().map(|result| match result {
                        Ok(config) => view! { <ProductManager config=config /> }.into_any(),
                        Err(e) => view! {
                            <FailurePanel heading="Could not load the session" detail=e.to_string() />
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Re-fetch the product list into the workflow
async fn resync(workflow: RwSignal<ProductWorkflow>, api: HttpProductApi) {
    let result = api.list_products().await;
    workflow.update(|w| w.apply_products(result));
}

/// Form + grid for one API session
#[component]
pub fn ProductManager(config: AdminConfig) -> impl IntoView {
    let api = match HttpProductApi::new(config.clone()) {
        Ok(api) => api,
        Err(err) => {
            return view! { <FailurePanel heading="API client unavailable" detail=err.to_string() /> }
                .into_any()
        }
    };
    let api = StoredValue::new(api);
    let workflow = RwSignal::new(ProductWorkflow::new());

    // Mount: categories drive the loading flag, products load alongside
    Effect::new(move |_| {
        let categories_api = api.get_value();
        spawn_local(async move {
            workflow.update(|w| w.begin_category_load());
            let result = categories_api.list_categories().await;
            workflow.update(|w| w.apply_categories(result));
        });
        spawn_local(resync(workflow, api.get_value()));
    });

    // Banners clear themselves; a new message restarts the countdown
    let shown_message = Memo::new(move |_| {
        workflow.with(|w| w.status().shown_message().map(str::to_owned))
    });
    let dismiss_timer = StoredValue::new(None::<TimeoutHandle>);
    Effect::new(move |_| {
        if let Some(handle) = dismiss_timer.get_value() {
            handle.clear();
        }
        dismiss_timer.set_value(None);
        if shown_message.get().is_none() {
            return;
        }
        match set_timeout_with_handle(move || workflow.update(|w| w.dismiss_status()), STATUS_DISMISS_AFTER) {
            Ok(handle) => dismiss_timer.set_value(Some(handle)),
            Err(e) => tracing::warn!("Could not schedule banner dismissal: {:?}", e),
        }
    });

    let on_submit = Callback::new(move |()| {
        let Some(Ok(ticket)) = workflow.try_update(|w| w.prepare_submit()) else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = ticket.send(&api).await;
            let saved = workflow.try_update(|w| w.complete_submit(ticket.token, result));
            if matches!(saved, Some(Ok(_))) {
                resync(workflow, api).await;
            }
        });
    });

    let on_cancel = Callback::new(move |()| workflow.update(|w| w.cancel_edit()));

    let on_edit = Callback::new(move |id: String| {
        let found = workflow.try_update(|w| w.begin_edit(&id)).unwrap_or(false);
        if found {
            window().scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let on_delete = Callback::new(move |id: String| {
        let browser_confirm = |prompt: &str| window().confirm_with_message(prompt).unwrap_or(false);
        if !browser_confirm.confirm(DELETE_PROMPT) {
            return;
        }
        let Some(Ok(ticket)) = workflow.try_update(|w| w.prepare_remove(&id)) else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = ticket.send(&api).await;
            let removed = workflow.try_update(|w| w.complete_remove(ticket.token, result));
            if matches!(removed, Some(Ok(_))) {
                resync(workflow, api).await;
            }
        });
    });

    let status = Signal::derive(move || workflow.with(|w| w.status().clone()));
    let products = Memo::new(move |_| {
        workflow.with(|w| w.products().map(|p| p.to_vec()).unwrap_or_default())
    });
    let stale = Memo::new(move |_| workflow.with(|w| w.products_stale()));
    let on_dismiss = Callback::new(move |()| workflow.update(|w| w.dismiss_status()));

    view! {
        <div class="w-full flex flex-col gap-4">
            <StatusBanner status=status on_dismiss=on_dismiss />
            <ProductForm workflow=workflow on_submit=on_submit on_cancel=on_cancel />
            <ProductGrid
                products=products.into()
                stale=stale.into()
                config=config
                on_edit=on_edit
                on_delete=on_delete
            />
        </div>
    }
    .into_any()
}
