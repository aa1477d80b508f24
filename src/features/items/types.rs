use serde::{Deserialize, Serialize};

pub const STATUS_PUBLISHED: &str = "published";
pub const STATUS_UNPUBLISHED: &str = "unpublished";

/// One catalog entry. The API uses `_id` on the wire and leaves most fields
/// optional; the item pages use the generic fields (`title`, `category`,
/// `price`) while the product dashboard uses the product fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "productName", default)]
    pub product_name: String,
    #[serde(rename = "productType", default)]
    pub product_type: String,
    #[serde(rename = "quantityStock", default)]
    pub quantity_stock: u32,
    #[serde(default)]
    pub mrp: f64,
    #[serde(rename = "sellingPrice", default)]
    pub selling_price: f64,
    #[serde(rename = "brandName", default)]
    pub brand_name: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "exchangeEligibility", default)]
    pub exchange_eligibility: String,
    #[serde(default)]
    pub status: String,
    /// Owning user, as the API reports it (id string or embedded record).
    #[serde(rename = "createdBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<serde_json::Value>,
}

impl Item {
    pub fn is_published(&self) -> bool {
        self.status == STATUS_PUBLISHED
    }

    /// The status the publish toggle should switch to.
    pub fn toggled_status(&self) -> &'static str {
        if self.is_published() {
            STATUS_UNPUBLISHED
        } else {
            STATUS_PUBLISHED
        }
    }

    /// Case-insensitive match across the fields the dashboard search covers.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&self.product_name, &self.brand_name, &self.product_type]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Body for the status toggle endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::{Item, STATUS_PUBLISHED, STATUS_UNPUBLISHED};

    #[test]
    fn item_maps_wire_field_names() {
        let item: Item = serde_json::from_str(
            r#"{"_id":"i1","productName":"Desk","brandName":"Oak","productType":"furniture",
                "quantityStock":3,"mrp":100.0,"sellingPrice":80.0,"images":["a.png"],
                "exchangeEligibility":"Yes","status":"published"}"#,
        )
        .expect("Failed to deserialize");

        assert_eq!(item.id, "i1");
        assert_eq!(item.product_name, "Desk");
        assert_eq!(item.quantity_stock, 3);
        assert!(item.is_published());
        assert_eq!(item.toggled_status(), STATUS_UNPUBLISHED);
    }

    #[test]
    fn unknown_status_toggles_to_published() {
        let item = Item::default();
        assert!(!item.is_published());
        assert_eq!(item.toggled_status(), STATUS_PUBLISHED);
    }

    #[test]
    fn search_matches_name_brand_and_type() {
        let item: Item = serde_json::from_str(
            r#"{"_id":"i1","productName":"Standing Desk","brandName":"Oakline","productType":"Furniture"}"#,
        )
        .unwrap();

        assert!(item.matches_search(""));
        assert!(item.matches_search("desk"));
        assert!(item.matches_search("OAK"));
        assert!(item.matches_search("furn"));
        assert!(!item.matches_search("lamp"));
    }
}
