use serde::{Deserialize, Serialize};

/// A single stored item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Root shape of the persisted store file
///
/// `items` carries a serde default so a document missing the field still
/// parses to an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Request body for POST /items
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Request body for PUT /items/{id}
///
/// Both fields are optional; an omitted or empty field keeps its prior
/// value on the stored item.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}
