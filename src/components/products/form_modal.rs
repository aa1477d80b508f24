//! Shared add/edit product modal. Field values are edited as strings and
//! validated into an `Item` on submit; validation failures stay local and
//! never reach the API.

use crate::app_lib::AppError;
use crate::components::ui::{Alert, AlertKind, Button, Modal, SelectField, TextArea, TextField};
use crate::features::auth::state::use_auth;
use crate::features::items::{client, types::Item, types::STATUS_UNPUBLISHED};
use leptos::prelude::*;

pub(crate) const PRODUCT_TYPES: [(&str, &str); 5] = [
    ("", "Select product type"),
    ("electronics", "Electronics"),
    ("clothing", "Clothing"),
    ("books", "Books"),
    ("other", "Other"),
];

/// Raw form values as the user typed them.
#[derive(Clone, Debug, Default)]
pub(crate) struct ProductInput {
    pub product_name: String,
    pub product_type: String,
    pub quantity_stock: String,
    pub mrp: String,
    pub selling_price: String,
    pub brand_name: String,
    pub images: String,
    pub exchange_eligibility: String,
    pub description: String,
}

/// Per-field validation messages, one failure per field.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ProductFormErrors {
    pub product_name: Option<String>,
    pub product_type: Option<String>,
    pub quantity_stock: Option<String>,
    pub mrp: Option<String>,
    pub selling_price: Option<String>,
    pub brand_name: Option<String>,
}

impl ProductFormErrors {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Validates the raw input and assembles the item to send. New products start
/// unpublished; edits keep whatever status the item already has.
pub(crate) fn build_product(
    input: &ProductInput,
    existing: Option<&Item>,
) -> Result<Item, ProductFormErrors> {
    let mut errors = ProductFormErrors::default();

    if input.product_name.trim().is_empty() {
        errors.product_name = Some("Please enter product name".to_string());
    }
    if input.product_type.trim().is_empty() {
        errors.product_type = Some("Please select product type".to_string());
    }

    let quantity_stock = input.quantity_stock.trim().parse::<u32>().ok();
    if !matches!(quantity_stock, Some(value) if value > 0) {
        errors.quantity_stock = Some("Please enter valid quantity stock".to_string());
    }
    let mrp = input.mrp.trim().parse::<f64>().ok();
    if !matches!(mrp, Some(value) if value > 0.0) {
        errors.mrp = Some("Please enter valid MRP".to_string());
    }
    let selling_price = input.selling_price.trim().parse::<f64>().ok();
    if !matches!(selling_price, Some(value) if value > 0.0) {
        errors.selling_price = Some("Please enter valid selling price".to_string());
    }

    if input.brand_name.trim().is_empty() {
        errors.brand_name = Some("Please enter brand name".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut item = existing.cloned().unwrap_or_default();
    item.product_name = input.product_name.trim().to_string();
    item.product_type = input.product_type.trim().to_string();
    item.quantity_stock = quantity_stock.unwrap_or_default();
    item.mrp = mrp.unwrap_or_default();
    item.selling_price = selling_price.unwrap_or_default();
    item.brand_name = input.brand_name.trim().to_string();
    item.images = input
        .images
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    item.exchange_eligibility = if input.exchange_eligibility.is_empty() {
        "Yes".to_string()
    } else {
        input.exchange_eligibility.clone()
    };
    item.description = Some(input.description.trim().to_string()).filter(|d| !d.is_empty());
    if existing.is_none() {
        item.status = STATUS_UNPUBLISHED.to_string();
    }

    Ok(item)
}

/// Add/edit modal; `initial = None` creates, `Some(item)` edits in place.
#[component]
pub fn ProductFormModal(
    initial: Option<Item>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let editing = initial.clone();
    let title = if editing.is_some() {
        "Edit Product"
    } else {
        "Add Product"
    };

    let seed = initial.unwrap_or_default();
    let product_name = RwSignal::new(seed.product_name.clone());
    let product_type = RwSignal::new(seed.product_type.clone());
    let quantity_stock = RwSignal::new(if seed.quantity_stock == 0 {
        String::new()
    } else {
        seed.quantity_stock.to_string()
    });
    let mrp = RwSignal::new(if seed.mrp == 0.0 {
        String::new()
    } else {
        seed.mrp.to_string()
    });
    let selling_price = RwSignal::new(if seed.selling_price == 0.0 {
        String::new()
    } else {
        seed.selling_price.to_string()
    });
    let brand_name = RwSignal::new(seed.brand_name.clone());
    let images = RwSignal::new(seed.images.join("\n"));
    let exchange_eligibility = RwSignal::new(if seed.exchange_eligibility.is_empty() {
        "Yes".to_string()
    } else {
        seed.exchange_eligibility.clone()
    });
    let description = RwSignal::new(seed.description.clone().unwrap_or_default());

    let (errors, set_errors) = signal(ProductFormErrors::default());
    let (submit_error, set_submit_error) = signal::<Option<AppError>>(None);

    let save_action = Action::new_local(move |item: &Item| {
        let item = item.clone();
        let token = auth.token();
        async move {
            match item.id.is_empty() {
                true => client::create_item(&item, token.as_deref()).await,
                false => client::update_item(&item.id, &item, token.as_deref()).await,
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => on_saved.run(()),
                Err(err) => set_submit_error.set(Some(err)),
            }
        }
    });

    let editing_for_submit = editing.clone();
    let on_submit = move |_| {
        if save_action.pending().get_untracked() {
            return;
        }
        set_submit_error.set(None);

        let input = ProductInput {
            product_name: product_name.get_untracked(),
            product_type: product_type.get_untracked(),
            quantity_stock: quantity_stock.get_untracked(),
            mrp: mrp.get_untracked(),
            selling_price: selling_price.get_untracked(),
            brand_name: brand_name.get_untracked(),
            images: images.get_untracked(),
            exchange_eligibility: exchange_eligibility.get_untracked(),
            description: description.get_untracked(),
        };

        match build_product(&input, editing_for_submit.as_ref()) {
            Ok(item) => {
                set_errors.set(ProductFormErrors::default());
                save_action.dispatch(item);
            }
            Err(validation) => set_errors.set(validation),
        }
    };

    view! {
        <Modal title=title on_close=on_close>
            <TextField
                label="Product Name"
                value=product_name
                error=Signal::derive(move || errors.get().product_name)
            />
            <SelectField
                label="Product Type"
                value=product_type
                options=PRODUCT_TYPES.to_vec()
                error=Signal::derive(move || errors.get().product_type)
            />
            <TextField
                label="Quantity Stock"
                value=quantity_stock
                input_type="number"
                error=Signal::derive(move || errors.get().quantity_stock)
            />
            <TextField
                label="MRP"
                value=mrp
                input_type="number"
                error=Signal::derive(move || errors.get().mrp)
            />
            <TextField
                label="Selling Price"
                value=selling_price
                input_type="number"
                error=Signal::derive(move || errors.get().selling_price)
            />
            <TextField
                label="Brand Name"
                value=brand_name
                error=Signal::derive(move || errors.get().brand_name)
            />
            <TextArea
                label="Image URLs (one per line)"
                value=images
            />
            <SelectField
                label="Exchange Eligibility"
                value=exchange_eligibility
                options=vec![("Yes", "Yes"), ("No", "No")]
            />
            <TextArea label="Description" value=description />

            {move || {
                submit_error
                    .get()
                    .map(|err| view! {
                        <div class="mb-4">
                            <Alert kind=AlertKind::Error message=err.to_string() />
                        </div>
                    })
            }}

            <div class="flex justify-end gap-2">
                <Button disabled=save_action.pending() on:click=on_submit>
                    {if editing.is_some() { "Save Changes" } else { "Add Product" }}
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::{build_product, ProductInput};
    use crate::features::items::types::{Item, STATUS_PUBLISHED, STATUS_UNPUBLISHED};

    fn valid_input() -> ProductInput {
        ProductInput {
            product_name: "Standing Desk".to_string(),
            product_type: "other".to_string(),
            quantity_stock: "4".to_string(),
            mrp: "100".to_string(),
            selling_price: "80".to_string(),
            brand_name: "Oakline".to_string(),
            images: "https://cdn.example/a.png\n\n  https://cdn.example/b.png  \n".to_string(),
            exchange_eligibility: String::new(),
            description: "  ".to_string(),
        }
    }

    #[test]
    fn valid_input_builds_an_unpublished_product() {
        let item = build_product(&valid_input(), None).expect("valid input");
        assert_eq!(item.product_name, "Standing Desk");
        assert_eq!(item.quantity_stock, 4);
        assert_eq!(item.status, STATUS_UNPUBLISHED);
        assert_eq!(item.images.len(), 2);
        assert_eq!(item.exchange_eligibility, "Yes");
        assert_eq!(item.description, None);
    }

    #[test]
    fn every_required_field_is_checked() {
        let errors = build_product(&ProductInput::default(), None).unwrap_err();
        assert!(errors.product_name.is_some());
        assert!(errors.product_type.is_some());
        assert!(errors.quantity_stock.is_some());
        assert!(errors.mrp.is_some());
        assert!(errors.selling_price.is_some());
        assert!(errors.brand_name.is_some());
    }

    #[test]
    fn zero_and_junk_numbers_are_rejected() {
        let mut input = valid_input();
        input.quantity_stock = "0".to_string();
        input.mrp = "free".to_string();
        let errors = build_product(&input, None).unwrap_err();
        assert!(errors.quantity_stock.is_some());
        assert!(errors.mrp.is_some());
        assert!(errors.selling_price.is_none());
    }

    #[test]
    fn editing_preserves_id_and_status() {
        let existing = Item {
            id: "i1".to_string(),
            status: STATUS_PUBLISHED.to_string(),
            ..Item::default()
        };
        let item = build_product(&valid_input(), Some(&existing)).expect("valid input");
        assert_eq!(item.id, "i1");
        assert_eq!(item.status, STATUS_PUBLISHED);
    }
}
