use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::{get, patch, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::{GenerateShoppingListRequest, ShoppingListDetails};
use super::repo_types::{ShoppingList, ShoppingListItem, ShoppingListItemPatch};
use super::services;
use crate::state::AppState;

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/shopping-lists/:id", get(get_shopping_list))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/meal-plans/:id/shopping-list",
            post(generate_shopping_list),
        )
        .route(
            "/shopping-lists/:id/items/:item_id",
            patch(update_shopping_list_item),
        )
}

// --- handlers ---

/// POST /meal-plans/:id/shopping-list { "name": "..." }
#[instrument(skip(state, payload))]
pub async fn generate_shopping_list(
    State(state): State<AppState>,
    Path(meal_plan_id): Path<Uuid>,
    Json(payload): Json<GenerateShoppingListRequest>,
) -> Result<(StatusCode, HeaderMap, Json<ShoppingList>), (StatusCode, String)> {
    let name = payload.name.trim();
    if name.is_empty() {
        warn!(%meal_plan_id, "blank shopping list name");
        return Err((StatusCode::BAD_REQUEST, "name is required".into()));
    }

    let list = services::generate_from_meal_plan(&state, meal_plan_id, name).await?;

    let mut headers = HeaderMap::new();
    let location = HeaderValue::from_str(&format!("/api/v1/shopping-lists/{}", list.id))
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    headers.insert(header::LOCATION, location);

    Ok((StatusCode::CREATED, headers, Json(list)))
}

#[instrument(skip(state))]
pub async fn get_shopping_list(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShoppingListDetails>, (StatusCode, String)> {
    let (list, items) = services::get_with_items(&state, id).await?;
    Ok(Json(ShoppingListDetails {
        id: list.id,
        name: list.name,
        meal_plan_id: list.meal_plan_id,
        created_at: list.created_at,
        items,
    }))
}

/// PATCH /shopping-lists/:id/items/:item_id, only the fields sent are changed.
#[instrument(skip(state, payload))]
pub async fn update_shopping_list_item(
    State(state): State<AppState>,
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<ShoppingListItemPatch>,
) -> Result<Json<ShoppingListItem>, (StatusCode, String)> {
    let item = services::update_item(&state, list_id, item_id, payload).await?;
    info!(%list_id, %item_id, is_purchased = item.is_purchased, "shopping list item updated");
    Ok(Json(item))
}
