// admin/components/product.rs - Product display components
//
// - ProductCard: grid card with edit and delete actions
// - ProductGrid: the full product list as last fetched from the API

use leptos::prelude::*;

use super::common::StaleNotice;
use crate::admin::config::AdminConfig;
use crate::admin::format::{card_title, discount_label, price_label, sale_price_label};
use crate::admin::model::Product;

/// Product card for the management grid
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
    /// Resolved thumbnail URL
    image_url: String,
    /// Called with the product id when the edit icon is clicked
    on_edit: Callback<String>,
    /// Called with the product id when the delete icon is clicked
    on_delete: Callback<String>,
) -> impl IntoView {
    let edit_id = product.id.clone();
    let delete_id = product.id.clone();
    let title = card_title(&product).to_string();
    let price = price_label(&product);
    let discount = discount_label(&product);
    let sale_price = sale_price_label(&product);

    view! {
        <div class="flex flex-col justify-center items-center gap-2 border-[1px] border-solid \
                    border-green-500 hover:border-green-400 duration-200 rounded-lg p-2">
            <img
                src=image_url
                alt="product thumbnail"
                width="400"
                height="400"
                class="w-[200px] h-[200px] object-cover"
            />
            <h2 class="text-lg">{title}</h2>
            <p class="text-gray-400">{product.category.clone()}</p>
            <p class="font-bold">{price}</p>
            <p class="font-bold text-red-500">{discount}</p>
            {sale_price.map(|label| view! {
                <p class="text-sm text-green-600">"Now " {label}</p>
            })}
            <span class="flex items-center justify-center gap-2">
                <button
                    type="button"
                    title="Delete product"
                    class="w-[16px] h-[16px] cursor-pointer duration-200 text-red-500 hover:text-red-400"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "🗑"
                </button>
                <button
                    type="button"
                    title="Edit product"
                    class="w-[16px] h-[16px] cursor-pointer duration-200 text-blue-500 hover:text-blue-400"
                    on:click=move |_| on_edit.run(edit_id.clone())
                >
                    "✎"
                </button>
            </span>
        </div>
    }
}

/// Grid of every product in the last successful fetch
#[component]
pub fn ProductGrid(
    products: Signal<Vec<Product>>,
    /// Last refresh failed
    stale: Signal<bool>,
    /// Used to resolve thumbnail URLs
    config: AdminConfig,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let config = StoredValue::new(config);

    view! {
        <div class="w-full flex flex-col gap-4 mt-10">
            <Show when=move || stale.get()>
                <StaleNotice message="Could not refresh products; showing the last loaded list." />
            </Show>
            <div class="w-full flex items-center gap-4 flex-wrap">
                {move || {
                    products
                        .get()
                        .into_iter()
                        .map(|product| {
                            let image_url = config.with_value(|c| c.image_url(&product.thumbnail));
                            view! {
                                <ProductCard
                                    product=product
                                    image_url=image_url
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
