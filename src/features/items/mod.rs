//! Catalog feature: the `/items` resource and its API wrappers. The product
//! dashboard and the item pages are two views over this same resource.

pub(crate) mod client;
pub(crate) mod types;
