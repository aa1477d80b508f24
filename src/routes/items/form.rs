//! Shared item form used by the create and edit pages. Values are edited as
//! strings and validated into an `Item` on submit.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, SelectField, Spinner, TextArea, TextField};
use crate::features::items::types::Item;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

pub(crate) const CATEGORIES: [(&str, &str); 4] = [
    ("electronics", "Electronics"),
    ("clothing", "Clothing"),
    ("books", "Books"),
    ("other", "Other"),
];

/// Category options with a context-specific label for the blank choice.
pub(crate) fn category_options(blank_label: &'static str) -> Vec<(&'static str, &'static str)> {
    let mut options = vec![("", blank_label)];
    options.extend(CATEGORIES);
    options
}

/// Validates the form strings and folds them into `base`. Title is required;
/// a non-numeric price is rejected rather than silently dropped.
pub(crate) fn build_item(
    base: &Item,
    title: &str,
    description: &str,
    category: &str,
    price: &str,
    image: &str,
) -> Result<Item, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let price = price.trim();
    let price = if price.is_empty() {
        None
    } else {
        match price.parse::<f64>() {
            Ok(value) if value >= 0.0 => Some(value),
            _ => {
                return Err(AppError::Validation(
                    "Please enter a valid price".to_string(),
                ))
            }
        }
    };

    let mut item = base.clone();
    item.title = title.to_string();
    item.description = Some(description.trim().to_string()).filter(|d| !d.is_empty());
    item.category = Some(category.trim().to_string()).filter(|c| !c.is_empty());
    item.price = price;
    item.image = Some(image.trim().to_string()).filter(|i| !i.is_empty());
    Ok(item)
}

/// Renders the form bound to the given item and submits through `on_save`.
#[component]
pub fn ItemForm(
    initial: Item,
    submit_label: &'static str,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] error: Signal<Option<AppError>>,
    on_save: Callback<Item>,
) -> impl IntoView {
    let base = initial.clone();
    let title = RwSignal::new(initial.title.clone());
    let description = RwSignal::new(initial.description.clone().unwrap_or_default());
    let category = RwSignal::new(initial.category.clone().unwrap_or_default());
    let price = RwSignal::new(
        initial
            .price
            .map(|value| value.to_string())
            .unwrap_or_default(),
    );
    let image = RwSignal::new(initial.image.clone().unwrap_or_default());
    let (local_error, set_local_error) = signal::<Option<AppError>>(None);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if saving.get_untracked() {
            return;
        }
        set_local_error.set(None);

        match build_item(
            &base,
            &title.get_untracked(),
            &description.get_untracked(),
            &category.get_untracked(),
            &price.get_untracked(),
            &image.get_untracked(),
        ) {
            Ok(item) => on_save.run(item),
            Err(err) => set_local_error.set(Some(err)),
        }
    };

    view! {
        <form class="max-w-lg" on:submit=on_submit>
            {move || {
                local_error
                    .get()
                    .or_else(|| error.get())
                    .map(|err| {
                        view! {
                            <div class="mb-4">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            </div>
                        }
                    })
            }}
            <TextField label="Title" value=title />
            <TextArea label="Description" value=description />
            <SelectField label="Category" value=category options=category_options("Select category") />
            <TextField label="Price" value=price input_type="number" />
            <TextField label="Image URL" value=image />
            <Button button_type="submit" disabled=saving>
                {submit_label}
            </Button>
            {move || saving.get().then_some(view! { <div class="mt-4"><Spinner /></div> })}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::build_item;
    use crate::app_lib::AppError;
    use crate::features::items::types::Item;

    #[test]
    fn title_is_required() {
        let err = build_item(&Item::default(), "  ", "", "", "", "").unwrap_err();
        assert_eq!(err, AppError::Validation("Title is required".to_string()));
    }

    #[test]
    fn optional_fields_collapse_to_none() {
        let item = build_item(&Item::default(), "Lamp", "  ", "", "", "").expect("valid");
        assert_eq!(item.title, "Lamp");
        assert_eq!(item.description, None);
        assert_eq!(item.category, None);
        assert_eq!(item.price, None);
        assert_eq!(item.image, None);
    }

    #[test]
    fn price_must_be_a_non_negative_number() {
        assert!(build_item(&Item::default(), "Lamp", "", "", "cheap", "").is_err());
        assert!(build_item(&Item::default(), "Lamp", "", "", "-2", "").is_err());
        let item = build_item(&Item::default(), "Lamp", "", "", "19.5", "").expect("valid");
        assert_eq!(item.price, Some(19.5));
    }

    #[test]
    fn base_fields_survive_the_rebuild() {
        let base = Item {
            id: "i1".to_string(),
            status: "published".to_string(),
            ..Item::default()
        };
        let item = build_item(&base, "Lamp", "", "books", "", "").expect("valid");
        assert_eq!(item.id, "i1");
        assert_eq!(item.status, "published");
        assert_eq!(item.category, Some("books".to_string()));
    }
}
