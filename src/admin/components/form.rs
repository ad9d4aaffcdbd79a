// admin/components/form.rs - Product create/edit form
//
// Reads and writes the shared ProductWorkflow signal directly: text inputs
// update the draft, file inputs stage attachments, the submit button hands
// off to the page's on_submit callback.

use leptos::prelude::*;

use super::common::{ButtonKind, FormButton, Spinner, StaleNotice};
use crate::admin::format::file_size_label;
use crate::admin::model::{AttachmentSummary, ProductField};
use crate::admin::workflow::ProductWorkflow;

/// Which pending slot a file input feeds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileSlot {
    Thumbnail,
    Images,
}

/// Name and size of a staged attachment
#[component]
pub fn AttachmentPreview(summary: AttachmentSummary) -> impl IntoView {
    let size = file_size_label(summary.size);

    view! {
        <div class="flex items-start flex-col gap-2">
            <span class="text-base max-md:text-sm text-yellow-500 flex items-start flex-col">
                {summary.file_name}
                <p class="text-sm text-black">{size}</p>
            </span>
        </div>
    }
}

#[component]
pub fn ProductForm(
    workflow: RwSignal<ProductWorkflow>,
    /// Submit the draft (create or update depending on mode)
    on_submit: Callback<()>,
    /// Leave edit mode
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_loading = Memo::new(move |_| workflow.with(|w| w.status().is_loading));
    let is_edit = Memo::new(move |_| workflow.with(|w| w.mode().is_edit()));
    let submit_label = Memo::new(move |_| workflow.with(|w| w.mode().submit_label()));
    let categories_stale = Memo::new(move |_| workflow.with(|w| w.categories_stale()));
    let thumbnail = Memo::new(move |_| {
        workflow.with(|w| w.pending().thumbnail.as_ref().map(|a| a.summary()))
    });
    let images = Memo::new(move |_| {
        workflow.with(|w| {
            w.pending()
                .images
                .iter()
                .flatten()
                .map(|a| a.summary())
                .collect::<Vec<_>>()
        })
    });

    let input_class = "w-fit max-md:w-40 p-3 max-md:p-1 rounded-md border-none outline-none";
    let pick_class = "p-2 max-md:p-1 bg-white max-md:text-xs text-sm text-black \
                      hover:text-green-400 duration-200 rounded-md cursor-pointer";

    let text_inputs = ProductField::TEXT_INPUTS
        .into_iter()
        .map(move |field| {
            view! {
                <input
                    type="text"
                    name=field.name()
                    placeholder=field.placeholder()
                    class=input_class
                    prop:value=move || workflow.with(|w| w.draft().get(field).to_string())
                    on:input=move |ev| {
                        workflow.update(|w| w.update_field(field, event_target_value(&ev)))
                    }
                />
            }
        })
        .collect_view();

    view! {
        <div class="w-full mt-5 h-fit bg-slate-300 rounded-md flex flex-col items-center gap-5 p-14">
            {text_inputs}

            {move || {
                if is_loading.get() {
                    return view! { <Spinner label="Loading categories..." /> }.into_any();
                }
                let current = workflow.with(|w| w.draft().category.clone());
                let options = workflow.with(|w| w.categories().map(|c| c.to_vec()).unwrap_or_default());
                view! {
                    <select
                        name="category"
                        class="w-fit p-3 max-md:p-1 rounded-md border-none outline-none"
                        on:change=move |ev| {
                            workflow.update(|w| {
                                w.update_field(ProductField::Category, event_target_value(&ev))
                            })
                        }
                    >
                        {options
                            .into_iter()
                            .map(|category| {
                                let selected = category.title == current;
                                let value = category.title.clone();
                                view! {
                                    <option value=value selected=selected>
                                        {category.title}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                }
                .into_any()
            }}
            <Show when=move || categories_stale.get()>
                <StaleNotice message="Could not load categories." />
            </Show>

            <input
                id="selectThumbnail"
                type="file"
                accept="image/*"
                class="hidden"
                on:change=move |ev| stage_files(ev, workflow, FileSlot::Thumbnail)
            />
            <label for="selectThumbnail" class=pick_class>"Choose thumbnail"</label>
            {move || thumbnail.get().map(|summary| view! { <AttachmentPreview summary=summary /> })}

            <input
                id="selectImages"
                type="file"
                accept="image/*"
                multiple=true
                class="hidden"
                on:change=move |ev| stage_files(ev, workflow, FileSlot::Images)
            />
            <label for="selectImages" class=pick_class>"Choose images"</label>
            {move || {
                images
                    .get()
                    .into_iter()
                    .map(|summary| view! { <AttachmentPreview summary=summary /> })
                    .collect_view()
            }}

            {move || {
                if is_loading.get() {
                    view! { <Spinner label="Saving..." /> }.into_any()
                } else {
                    view! {
                        <div class="flex items-center gap-3">
                            <FormButton on_click=on_submit>{submit_label.get()}</FormButton>
                            <Show when=move || is_edit.get()>
                                <FormButton on_click=on_cancel kind=ButtonKind::Secondary>"Cancel"</FormButton>
                            </Show>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// Read the files chosen in a file input and stage them on the workflow
fn stage_files(ev: leptos::web_sys::Event, workflow: RwSignal<ProductWorkflow>, slot: FileSlot) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::task::spawn_local;
        use wasm_bindgen::JsCast;

        let Some(files) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
        else {
            return;
        };

        spawn_local(async move {
            match read_files(files).await {
                Ok(files) => workflow.update(|w| match slot {
                    FileSlot::Thumbnail => match files.into_iter().next() {
                        Some(first) => w.select_thumbnail(first),
                        None => w.clear_thumbnail(),
                    },
                    FileSlot::Images => w.select_images(files),
                }),
                Err(err) => workflow.update(|w| w.report_error(&err)),
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (ev, workflow, slot);
}

#[cfg(feature = "hydrate")]
async fn read_files(
    files: web_sys::FileList,
) -> Result<Vec<crate::admin::model::Attachment>, crate::admin::error::AdminError> {
    use crate::admin::error::AdminError;
    use crate::admin::model::Attachment;

    let mut attachments = Vec::with_capacity(files.length() as usize);
    for index in 0..files.length() {
        let Some(file) = files.get(index) else {
            continue;
        };
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| AdminError::Attachment(format!("{}: {:?}", file.name(), e)))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        attachments.push(Attachment::new(file.name(), file.type_(), bytes));
    }
    Ok(attachments)
}
