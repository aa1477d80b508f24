//! Item detail route, fetched by the `:id` path parameter.

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Navbar, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::items::client;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ItemDetailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    let item = LocalResource::new(move || {
        let id = id();
        let token = auth.token();
        async move { client::get_item(&id, token.as_deref()).await }
    });

    view! {
        <Navbar>
            {move || match item.get() {
                None => view! {
                    <div class="flex justify-center py-16"><Spinner /></div>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <Alert kind=AlertKind::Error message=err.to_string() />
                }
                .into_any(),
                Some(Ok(item)) => view! {
                    <div class="max-w-2xl">
                        {item.image.clone().map(|src| {
                            view! {
                                <img
                                    src=src
                                    alt=item.title.clone()
                                    class="mb-6 h-64 w-full rounded-lg object-cover"
                                />
                            }
                        })}
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            {item.title.clone()}
                        </h1>
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
                        {item.description.clone().map(|description| {
                            view! {
                                <p class="mt-4 text-gray-600 dark:text-gray-300">{description}</p>
                            }
                        })}
                        <div class="mt-6 flex gap-2">
                            <A href=paths::item_edit(&item.id)>
                                <Button>"Edit"</Button>
                            </A>
                            <A href=paths::ITEMS>
                                <Button variant=ButtonVariant::Secondary>"Back to Items"</Button>
                            </A>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </Navbar>
    }
}
