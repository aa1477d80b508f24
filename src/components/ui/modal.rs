//! Overlay modal used by the product dashboard. Clicking the backdrop or the
//! close button invokes `on_close`; clicks inside the panel do not propagate.

use leptos::prelude::*;

#[component]
pub fn Modal(
    title: &'static str,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-40 flex items-center justify-center bg-gray-900/50 p-4"
            on:click=move |_| on_close.run(())
        >
            <div
                class="w-full max-w-lg max-h-[90vh] overflow-y-auto rounded-lg bg-white p-6 shadow-xl dark:bg-gray-800"
                on:click=move |event| event.stop_propagation()
            >
                <div class="mb-4 flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h2>
                    <button
                        type="button"
                        class="rounded-lg p-1.5 text-gray-400 hover:bg-gray-100 hover:text-gray-900 dark:hover:bg-gray-700 dark:hover:text-white"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <span class="material-symbols-outlined text-base">"close"</span>
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
