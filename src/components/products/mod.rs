//! Product dashboard widgets: the card grid entry and the add/edit/delete
//! modals. All of them operate on the shared catalog `Item` type.

mod delete_modal;
mod form_modal;
mod product_card;

pub(crate) use delete_modal::DeleteProductModal;
pub(crate) use form_modal::ProductFormModal;
pub(crate) use product_card::ProductCard;
