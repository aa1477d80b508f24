//! Delete confirmation for the product dashboard. The caller owns the actual
//! API call; this modal only confirms intent.

use crate::components::ui::{Button, ButtonVariant, Modal};
use leptos::prelude::*;

#[component]
pub fn DeleteProductModal(
    product_name: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="Delete Product" on_close=on_cancel>
            <p class="mb-6 text-sm text-gray-600 dark:text-gray-300">
                "Are you sure you want to delete "
                <span class="font-semibold text-gray-900 dark:text-white">{product_name}</span>
                "? This cannot be undone."
            </p>
            <div class="flex justify-end gap-2">
                <Button
                    variant=ButtonVariant::Secondary
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    on:click=move |_| on_confirm.run(())
                >
                    "Delete"
                </Button>
            </div>
        </Modal>
    }
}
