//! Create-item route wrapping the shared form.

use super::form::ItemForm;
use crate::app_lib::AppError;
use crate::components::ui::use_toasts;
use crate::components::{Navbar, ToastKind};
use crate::features::auth::state::use_auth;
use crate::features::items::{client, types::Item};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn CreateItemPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let (error, set_error) = signal::<Option<AppError>>(None);

    let save_action = Action::new_local(move |item: &Item| {
        let item = item.clone();
        let token = auth.token();
        async move { client::create_item(&item, token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    toasts.show("Item created Successfully", ToastKind::Success);
                    navigate(paths::ITEMS, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    view! {
        <Navbar>
            <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                "Create Item"
            </h1>
            <ItemForm
                initial=Item::default()
                submit_label="Create Item"
                saving=save_action.pending()
                error=Signal::derive(move || error.get())
                on_save=Callback::new(move |item: Item| {
                    set_error.set(None);
                    save_action.dispatch(item);
                })
            />
        </Navbar>
    }
}
