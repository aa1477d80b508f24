//! One product in the dashboard grid, with a dot-stepped image carousel and
//! the edit/delete/publish actions.

use crate::components::ui::{Button, ButtonVariant};
use crate::features::items::types::Item;
use leptos::prelude::*;

#[component]
pub fn ProductCard(
    product: Item,
    on_edit: Callback<Item>,
    on_delete: Callback<Item>,
    on_toggle_status: Callback<Item>,
) -> impl IntoView {
    let images = product.images.clone();
    let image_count = images.len();
    let (image_index, set_image_index) = signal(0usize);

    let current_image = {
        let images = images.clone();
        move || images.get(image_index.get()).cloned()
    };
    let alt_name = product.product_name.clone();

    let toggle_label = if product.is_published() {
        "Unpublish"
    } else {
        "Publish"
    };

    let edit_product = product.clone();
    let delete_product = product.clone();
    let toggle_product = product.clone();

    view! {
        <div class="flex flex-col overflow-hidden rounded-lg border border-gray-200 bg-white shadow-sm dark:border-gray-700 dark:bg-gray-800">
            <div class="relative flex h-40 items-center justify-center bg-gray-100 dark:bg-gray-700">
                {move || match current_image() {
                    Some(src) => view! {
                        <img src=src alt=alt_name.clone() class="h-full w-full object-cover" />
                    }
                    .into_any(),
                    None => view! {
                        <span class="material-symbols-outlined text-4xl text-gray-400">
                            "image"
                        </span>
                    }
                    .into_any(),
                }}
                <Show when=move || (image_count > 1)>
                    <div class="absolute bottom-2 left-0 right-0 flex justify-center gap-1.5">
                        {(0..image_count)
                            .map(|index| {
                                view! {
                                    <button
                                        type="button"
                                        aria-label=format!("Show image {}", index + 1)
                                        class="h-2 w-2 rounded-full bg-white/60"
                                        class=("bg-blue-600", move || image_index.get() == index)
                                        on:click=move |_| set_image_index.set(index)
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>

            <div class="flex flex-1 flex-col gap-1 p-4 text-sm text-gray-600 dark:text-gray-300">
                <h3 class="text-base font-semibold text-gray-900 dark:text-white">
                    {product.product_name.clone()}
                </h3>
                <p>"Product type - " {product.product_type.clone()}</p>
                <p>"Quantity Stock - " {product.quantity_stock}</p>
                <p>"MRP - ₹ " {product.mrp}</p>
                <p>"Selling Price - ₹ " {product.selling_price}</p>
                <p>"Brand Name - " {product.brand_name.clone()}</p>
                <p>"Exchange Eligibility - " {product.exchange_eligibility.clone()}</p>

                <div class="mt-3 flex flex-wrap gap-2">
                    <Button on:click=move |_| on_edit.run(edit_product.clone())>
                        "Edit"
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        on:click=move |_| on_toggle_status.run(toggle_product.clone())
                    >
                        {toggle_label}
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        on:click=move |_| on_delete.run(delete_product.clone())
                    >
                        "Delete"
                    </Button>
                </div>
            </div>
        </div>
    }
}
