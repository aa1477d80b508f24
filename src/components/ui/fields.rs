//! Labeled form fields with optional inline errors, shared by the auth forms
//! and the item/product editors.

use leptos::prelude::*;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
const FIELD_ERROR_CLASS: &str = "mt-1 text-sm text-red-600 dark:text-red-400";

/// Single-line input bound to a writable signal.
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");

    view! {
        <div class="mb-5">
            <label class=LABEL_CLASS>{label}</label>
            <input
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
            {error.map(|error| {
                view! {
                    {move || {
                        error.get().map(|message| {
                            view! { <p class=FIELD_ERROR_CLASS>{message}</p> }
                        })
                    }}
                }
            })}
        </div>
    }
}

/// Multi-line input bound to a writable signal.
#[component]
pub fn TextArea(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-5">
            <label class=LABEL_CLASS>{label}</label>
            <textarea
                class=INPUT_CLASS
                rows=4
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            ></textarea>
        </div>
    }
}

/// Dropdown bound to a writable signal; `options` are `(value, label)` pairs.
#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="mb-5">
            <label class=LABEL_CLASS>{label}</label>
            <select
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |event| value.set(event_target_value(&event))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == option_value
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {error.map(|error| {
                view! {
                    {move || {
                        error.get().map(|message| {
                            view! { <p class=FIELD_ERROR_CLASS>{message}</p> }
                        })
                    }}
                }
            })}
        </div>
    }
}
