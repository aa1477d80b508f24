//! Landing page: published/unpublished product tabs inside the dashboard
//! shell.

use crate::components::products::ProductCard;
use crate::components::{Alert, AlertKind, DashboardShell, Spinner, ToastKind};
use crate::components::ui::use_toasts;
use crate::features::auth::state::use_auth;
use crate::features::items::{client, client::ItemQuery, types::Item};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Browser confirm dialog; absent outside the browser.
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let (active_tab, set_active_tab) = signal("published");
    let (version, set_version) = signal(0u32);

    let products = LocalResource::new(move || {
        version.track();
        let token = auth.token();
        async move { client::list_items(&ItemQuery::default(), token.as_deref()).await }
    });
    let refetch = move || set_version.update(|v| *v += 1);

    let navigate = use_navigate();

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        let token = auth.token();
        async move { client::delete_item(&id, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
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

    let visible = move |items: &[Item]| -> Vec<Item> {
        items
            .iter()
            .filter(|item| {
                if active_tab.get() == "published" {
                    item.is_published()
                } else {
                    !item.is_published()
                }
            })
            .cloned()
            .collect()
    };

    let tab_class = |selected: bool| {
        if selected {
            "border-b-2 border-blue-600 px-4 py-2 text-sm font-medium text-blue-600"
        } else {
            "px-4 py-2 text-sm font-medium text-gray-500 hover:text-gray-900 dark:text-gray-400 dark:hover:text-white"
        }
    };

    view! {
        <DashboardShell>
            <div class="mb-6 flex gap-2 border-b border-gray-200 dark:border-gray-700">
                <button
                    type="button"
                    class=move || tab_class(active_tab.get() == "published")
                    on:click=move |_| set_active_tab.set("published")
                >
                    "Published"
                </button>
                <button
                    type="button"
                    class=move || tab_class(active_tab.get() == "unpublished")
                    on:click=move |_| set_active_tab.set("unpublished")
                >
                    "Unpublished"
                </button>
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
                    let shown = visible(&items);
                    if shown.is_empty() {
                        view! {
                            <div class="py-16 text-center">
                                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                                    {move || {
                                        if active_tab.get() == "published" {
                                            "No Published Products"
                                        } else {
                                            "No Unpublished Products"
                                        }
                                    }}
                                </h2>
                                <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">
                                    "Products you add show up here once they match this tab."
                                </p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 xl:grid-cols-3">
                                {shown
                                    .into_iter()
                                    .map(|product| {
                                        let edit_navigate = navigate.clone();
                                        view! {
                                            <ProductCard
                                                product=product
                                                on_edit=Callback::new(move |_| {
                                                    edit_navigate(paths::PRODUCTS, Default::default());
                                                })
                                                on_delete=Callback::new(move |item: Item| {
                                                    if confirm("Are you sure you want to delete this product?") {
                                                        delete_action.dispatch(item.id);
                                                    }
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
        </DashboardShell>
    }
}
