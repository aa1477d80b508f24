//! Items list route with live search and category filtering. Filtering is
//! done server-side through query parameters; the resource refetches whenever
//! either filter changes.

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Navbar, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::items::{client, client::ItemQuery, types::Item};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ItemsListPage() -> impl IntoView {
    let auth = use_auth();
    let (search_term, set_search_term) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (version, set_version) = signal(0u32);

    let items = LocalResource::new(move || {
        version.track();
        let query = ItemQuery {
            search: search_term.get(),
            category: category.get(),
        };
        let token = auth.token();
        async move { client::list_items(&query, token.as_deref()).await }
    });
    let refetch = move || set_version.update(|v| *v += 1);

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        let token = auth.token();
        async move { client::delete_item(&id, token.as_deref()).await }
    });

    let (delete_error, set_delete_error) = signal::<Option<String>>(None);
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => refetch(),
                Err(err) => set_delete_error.set(Some(err.to_string())),
            }
        }
    });

    view! {
        <Navbar>
            <div class="mb-6 flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Items"</h1>
                <A href=paths::ITEM_CREATE>
                    <Button>"Create New Item"</Button>
                </A>
            </div>

            <div class="mb-6 flex flex-wrap gap-3">
                <input
                    type="text"
                    placeholder="Search items..."
                    class="w-64 rounded-lg border border-gray-300 bg-gray-50 px-3 py-2 text-sm text-gray-900 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                    on:input=move |event| set_search_term.set(event_target_value(&event))
                />
                <select
                    class="rounded-lg border border-gray-300 bg-gray-50 px-3 py-2 text-sm text-gray-900 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                    on:change=move |event| set_category.set(event_target_value(&event))
                >
                    {super::form::category_options("All Categories")
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
            </div>

            {move || {
                delete_error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="mb-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
            }}

            {move || match items.get() {
                None => view! {
                    <div class="flex justify-center py-16"><Spinner /></div>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <Alert kind=AlertKind::Error message=err.to_string() />
                }
                .into_any(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <div class="py-16 text-center">
                        <p class="text-gray-500 dark:text-gray-400">
                            "No items found. Create your first item!"
                        </p>
                        <div class="mt-4 inline-block">
                            <A href=paths::ITEM_CREATE>
                                <Button>"Create Item"</Button>
                            </A>
                        </div>
                    </div>
                }
                .into_any(),
                Some(Ok(list)) => view! {
                    <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 xl:grid-cols-3">
                        {list
                            .into_iter()
                            .map(|item| {
                                let on_delete = Callback::new(move |id: String| {
                                    if confirm("Are you sure you want to delete this item?") {
                                        delete_action.dispatch(id);
                                    }
                                });
                                view! { <ItemCard item=item on_delete=on_delete /> }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </Navbar>
    }
}

/// Browser confirm dialog; absent outside the browser.
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
fn ItemCard(item: Item, on_delete: Callback<String>) -> impl IntoView {
    let item_id = item.id.clone();

    view! {
        <div class="flex flex-col overflow-hidden rounded-lg border border-gray-200 bg-white shadow-sm dark:border-gray-700 dark:bg-gray-800">
            {item.image.clone().map(|src| {
                view! {
                    <img src=src alt=item.title.clone() class="h-40 w-full object-cover" />
                }
            })}
            <div class="flex flex-1 flex-col p-4">
                <h3 class="text-base font-semibold text-gray-900 dark:text-white">
                    {item.title.clone()}
                </h3>
                {item.description.clone().map(|description| {
                    view! {
                        <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{description}</p>
                    }
                })}
                <div class="mt-2 flex items-center gap-3 text-sm">
                    {item.category.clone().map(|category| {
                        view! {
                            <span class="rounded bg-gray-100 px-2 py-0.5 text-gray-600 dark:bg-gray-700 dark:text-gray-300">
                                {category}
                            </span>
                        }
                    })}
                    {item.price.map(|price| {
                        view! {
                            <span class="font-medium text-gray-900 dark:text-white">
                                {format!("${price}")}
                            </span>
                        }
                    })}
                </div>
                <div class="mt-4 flex flex-wrap gap-2">
                    <A href=paths::item_detail(&item.id)>
                        <Button>"View"</Button>
                    </A>
                    <A href=paths::item_edit(&item.id)>
                        <Button variant=ButtonVariant::Secondary>"Edit"</Button>
                    </A>
                    <Button
                        variant=ButtonVariant::Danger
                        on:click=move |_| on_delete.run(item_id.clone())
                    >
                        "Delete"
                    </Button>
                </div>
            </div>
        </div>
    }
}
