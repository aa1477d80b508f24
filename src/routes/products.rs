//! Products route: the management view over the catalog. Card grid with
//! client-side search, add/edit/delete modals, and the publish toggle. CRUD
//! outcomes surface as toasts; the list refetches after every mutation.

use crate::components::products::{DeleteProductModal, ProductCard, ProductFormModal};
use crate::components::ui::use_toasts;
use crate::components::{Alert, AlertKind, DashboardShell, Spinner, ToastKind};
use crate::features::auth::state::use_auth;
use crate::features::items::{client, client::ItemQuery, types::Item};
use leptos::prelude::*;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let (search_term, set_search_term) = signal(String::new());
    let (show_add_modal, set_show_add_modal) = signal(false);
    let editing: RwSignal<Option<Item>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Item>> = RwSignal::new(None);
    let (version, set_version) = signal(0u32);

    let products = LocalResource::new(move || {
        version.track();
        let token = auth.token();
        async move { client::list_items(&ItemQuery::default(), token.as_deref()).await }
    });
    let refetch = move || set_version.update(|v| *v += 1);

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        let token = auth.token();
        async move { client::delete_item(&id, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            deleting.set(None);
            match result {
                Ok(()) => {
                    toasts.show("Product Deleted Successfully", ToastKind::Success);
                    refetch();
                }
                Err(err) => toasts.show(err.to_string(), ToastKind::Error),
            }
        }
    });

    let toggle_action = Action::new_local(move |product: &Item| {
        let id = product.id.clone();
        let status = product.toggled_status().to_string();
        let token = auth.token();
        async move { client::update_item_status(&id, &status, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = toggle_action.value().get() {
            match result {
                Ok(item) => {
                    let label = if item.is_published() { "Published" } else { "Unpublished" };
                    toasts.show(format!("Product {label} Successfully"), ToastKind::Success);
                    refetch();
                }
                Err(err) => toasts.show(err.to_string(), ToastKind::Error),
            }
        }
    });

    let filtered = move |items: &[Item]| -> Vec<Item> {
        let term = search_term.get();
        items
            .iter()
            .filter(|item| item.matches_search(&term))
            .cloned()
            .collect()
    };

    view! {
        <DashboardShell>
            <div class="mb-6 flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Products"</h1>
                <div class="flex items-center gap-3">
                    <input
                        type="text"
                        placeholder="Search products..."
                        class="rounded-lg border border-gray-300 bg-gray-50 px-3 py-2 text-sm text-gray-900 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                        on:input=move |event| set_search_term.set(event_target_value(&event))
                    />
                    <button
                        type="button"
                        class="rounded-lg bg-blue-700 px-4 py-2 text-sm font-medium text-white hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                        on:click=move |_| set_show_add_modal.set(true)
                    >
                        "+ Add Products"
                    </button>
                </div>
            </div>

            {move || match products.get() {
                None => view! {
                    <div class="flex justify-center py-16"><Spinner /></div>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <Alert kind=AlertKind::Error message=err.to_string() />
                }
                .into_any(),
                Some(Ok(items)) => {
                    let shown = filtered(&items);
                    if shown.is_empty() {
                        view! {
                            <div class="py-16 text-center">
                                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                                    "Feels a little empty over here..."
                                </h2>
                                <p class="mx-auto mt-2 max-w-md text-sm text-gray-500 dark:text-gray-400">
                                    "You can create products without connecting a store and add them to a store anytime."
                                </p>
                                <button
                                    type="button"
                                    class="mt-6 rounded-lg bg-blue-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                                    on:click=move |_| set_show_add_modal.set(true)
                                >
                                    "+ Add Products"
                                </button>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 xl:grid-cols-3">
                                {shown
                                    .into_iter()
                                    .map(|product| {
                                        view! {
                                            <ProductCard
                                                product=product
                                                on_edit=Callback::new(move |item: Item| {
                                                    editing.set(Some(item));
                                                })
                                                on_delete=Callback::new(move |item: Item| {
                                                    deleting.set(Some(item));
                                                })
                                                on_toggle_status=Callback::new(move |item: Item| {
                                                    toggle_action.dispatch(item);
                                                })
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}

            <Show when=move || show_add_modal.get()>
                <ProductFormModal
                    initial=None
                    on_close=Callback::new(move |_| set_show_add_modal.set(false))
                    on_saved=Callback::new(move |_| {
                        set_show_add_modal.set(false);
                        toasts.show("Product added Successfully", ToastKind::Success);
                        refetch();
                    })
                />
            </Show>

            {move || {
                editing.get().map(|item| {
                    view! {
                        <ProductFormModal
                            initial=Some(item)
                            on_close=Callback::new(move |_| editing.set(None))
                            on_saved=Callback::new(move |_| {
                                editing.set(None);
                                toasts.show("Product updated Successfully", ToastKind::Success);
                                refetch();
                            })
                        />
                    }
                })
            }}

            {move || {
                deleting.get().map(|item| {
                    let product_id = item.id.clone();
                    view! {
                        <DeleteProductModal
                            product_name=item.product_name.clone()
                            on_confirm=Callback::new(move |_| {
                                delete_action.dispatch(product_id.clone());
                            })
                            on_cancel=Callback::new(move |_| deleting.set(None))
                        />
                    }
                })
            }}
        </DashboardShell>
    }
}
