//! Edit-item route: loads the item by id, then wraps the shared form.

use super::form::ItemForm;
use crate::app_lib::AppError;
use crate::components::ui::use_toasts;
use crate::components::{Alert, AlertKind, Navbar, Spinner, ToastKind};
use crate::features::auth::state::use_auth;
use crate::features::items::{client, types::Item};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn EditItemPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();
    let (error, set_error) = signal::<Option<AppError>>(None);

    let item = LocalResource::new(move || {
        let id = id();
        let token = auth.token();
        async move { client::get_item(&id, token.as_deref()).await }
    });

    let save_action = Action::new_local(move |item: &Item| {
        let item = item.clone();
        let token = auth.token();
        async move { client::update_item(&item.id, &item, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    toasts.show("Item updated Successfully", ToastKind::Success);
                    navigate(paths::ITEMS, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    view! {
        <Navbar>
            <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                "Edit Item"
            </h1>
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
                    <ItemForm
                        initial=item
                        submit_label="Save Changes"
                        saving=save_action.pending()
                        error=Signal::derive(move || error.get())
                        on_save=Callback::new(move |item: Item| {
                            set_error.set(None);
                            save_action.dispatch(item);
                        })
                    />
                }
                .into_any(),
            }}
        </Navbar>
    }
}
