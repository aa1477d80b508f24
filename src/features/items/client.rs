//! Client wrappers for the catalog API endpoints. These functions keep
//! endpoint paths centralized and assume the backend enforces authorization;
//! callers pass the bearer token from the session store.

use crate::{
    app_lib::{delete_json, get_json, patch_json, post_json, put_json, AppError},
    features::items::types::{Item, StatusUpdate},
};

/// Filters for the item list. Empty fields are omitted from the query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemQuery {
    pub search: String,
    pub category: String,
}

impl ItemQuery {
    /// Builds the `/items` path with an encoded query string.
    fn to_path(&self) -> String {
        let mut pairs = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(format!("search={}", urlencoding::encode(search)));
        }
        let category = self.category.trim();
        if !category.is_empty() {
            pairs.push(format!("category={}", urlencoding::encode(category)));
        }

        if pairs.is_empty() {
            "/items".to_string()
        } else {
            format!("/items?{}", pairs.join("&"))
        }
    }
}

/// Fetches items matching the query.
pub async fn list_items(query: &ItemQuery, token: Option<&str>) -> Result<Vec<Item>, AppError> {
    get_json(&query.to_path(), token).await
}

/// Fetches one item by id after basic input validation.
pub async fn get_item(id: &str, token: Option<&str>) -> Result<Item, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Item id is required.".to_string()));
    }
    get_json(&format!("/items/{trimmed}"), token).await
}

pub async fn create_item(item: &Item, token: Option<&str>) -> Result<Item, AppError> {
    post_json("/items", item, token).await
}

pub async fn update_item(id: &str, item: &Item, token: Option<&str>) -> Result<Item, AppError> {
    put_json(&format!("/items/{id}"), item, token).await
}

pub async fn delete_item(id: &str, token: Option<&str>) -> Result<(), AppError> {
    delete_json(&format!("/items/{id}"), token).await
}

/// Flips an item between published and unpublished.
pub async fn update_item_status(
    id: &str,
    status: &str,
    token: Option<&str>,
) -> Result<Item, AppError> {
    patch_json(
        &format!("/items/{id}/status"),
        &StatusUpdate {
            status: status.to_string(),
        },
        token,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::ItemQuery;

    #[test]
    fn query_omits_empty_fields() {
        assert_eq!(ItemQuery::default().to_path(), "/items");
        assert_eq!(
            ItemQuery {
                search: "  ".to_string(),
                category: String::new(),
            }
            .to_path(),
            "/items"
        );
    }

    #[test]
    fn query_encodes_both_filters() {
        let path = ItemQuery {
            search: "standing desk".to_string(),
            category: "electronics".to_string(),
        }
        .to_path();
        assert_eq!(path, "/items?search=standing%20desk&category=electronics");
    }
}
