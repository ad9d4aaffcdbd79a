// admin/app.rs - Root application component
//
// Meta tags, the dashboard chrome and the router. Only the products screen
// exists; `/` lands on it too.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::admin::pages::ProductsPage;

pub const PRODUCTS_ROUTE: &str = "/dashboard/products";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Storefront Admin" />
        <Meta name="description" content="Product management dashboard for the storefront" />
        <Stylesheet id="leptos" href="/pkg/storefront_admin.css" />

        <Router>
            <DashboardHeader />
            <main class="min-h-screen">
                <Routes fallback=|| view! { <UnknownRoute /> }>
                    <Route path=path!("/") view=ProductsPage />
                    <Route path=path!("/dashboard/products") view=ProductsPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn DashboardHeader() -> impl IntoView {
    view! {
        <header class="w-full flex items-center justify-between bg-slate-800 text-white px-10 py-3">
            <span class="font-bold">"Storefront Admin"</span>
            <nav class="flex gap-4 text-sm">
                <A href=PRODUCTS_ROUTE>"Products"</A>
            </nav>
        </header>
    }
}

#[component]
fn UnknownRoute() -> impl IntoView {
    view! {
        <div class="w-full flex flex-col items-center p-10 gap-4">
            <p class="text-xl text-gray-600">"This dashboard page does not exist."</p>
            <a href=PRODUCTS_ROUTE class="p-3 bg-white text-black rounded-md hover:text-green-400 duration-200">
                "Back to products"
            </a>
        </div>
    }
}
