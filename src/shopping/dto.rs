use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::ShoppingListItem;

#[derive(Debug, Deserialize)]
pub struct GenerateShoppingListRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ShoppingListDetails {
    pub id: Uuid,
    pub name: String,
    pub meal_plan_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub items: Vec<ShoppingListItem>,
}
