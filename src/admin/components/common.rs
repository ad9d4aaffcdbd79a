// admin/components/common.rs - Small building blocks shared by the dashboard
//
// Stateless: everything arrives through props, events leave through
// callbacks.

use leptos::prelude::*;

use crate::admin::model::Status;

/// Spinner shown in place of controls while a request is out
#[component]
pub fn Spinner(
    #[prop(default = "Loading...")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-4" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-4 border-gray-200 border-t-white"></div>
            <span class="mt-2 text-gray-600 text-sm">{label}</span>
        </div>
    }
}

/// Full-width panel for failures that stop the page from working at all,
/// e.g. the session config could not be fetched
#[component]
pub fn FailurePanel(
    heading: &'static str,
    detail: String,
) -> impl IntoView {
    view! {
        <div class="w-full bg-red-50 border border-red-200 rounded-md p-6">
            <h3 class="text-red-800 font-bold mb-1">{heading}</h3>
            <p class="text-red-600 text-sm">{detail}</p>
        </div>
    }
}

/// Visual weight of a [`FormButton`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
}

impl ButtonKind {
    fn class(self) -> &'static str {
        match self {
            ButtonKind::Primary => {
                "p-3 bg-white text-black hover:text-green-400 duration-200 rounded-md \
                 disabled:opacity-50 disabled:cursor-not-allowed"
            }
            ButtonKind::Secondary => {
                "p-3 bg-transparent text-gray-700 rounded-md border border-gray-400 \
                 hover:bg-gray-100 duration-200"
            }
        }
    }
}

#[component]
pub fn FormButton(
    children: Children,
    on_click: Callback<()>,
    #[prop(optional)]
    kind: ButtonKind,
) -> impl IntoView {
    view! {
        <button type="button" class=kind.class() on:click=move |_| on_click.run(())>
            {children()}
        </button>
    }
}

/// Success / error banner driven by the workflow status
///
/// Errors take precedence over success messages.
#[component]
pub fn StatusBanner(
    status: Signal<Status>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            {move || {
                let Status { err, success_msg, .. } = status.get();
                let (text, class) = match (err, success_msg) {
                    (Some(err), _) => (err, "bg-red-50 border-red-200 text-red-700"),
                    (None, Some(msg)) => (msg, "bg-green-50 border-green-200 text-green-700"),
                    (None, None) => return None,
                };
                Some(view! {
                    <div class=format!("flex justify-between items-center border rounded-md px-4 py-2 {class}")>
                        <span>{text}</span>
                        <button
                            type="button"
                            class="ml-4 font-bold"
                            on:click=move |_| on_dismiss.run(())
                        >
                            "×"
                        </button>
                    </div>
                })
            }}
        </div>
    }
}

/// Shown when the last refresh failed and the data may be outdated
#[component]
pub fn StaleNotice(
    message: &'static str,
) -> impl IntoView {
    view! {
        <p class="text-xs text-yellow-700 bg-yellow-50 border border-yellow-200 rounded px-3 py-1">
            {message}
        </p>
    }
}
