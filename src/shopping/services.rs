use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::repo_types::{
    NewShoppingList, NewShoppingListItem, ShoppingList, ShoppingListItem, ShoppingListItemPatch,
};
use crate::config::MAX_QUANTITY_PRECISION;
use crate::error::AppError;
use crate::ingredients::repo_types::Ingredient;
use crate::recipes::repo_types::Recipe;
use crate::state::AppState;

/// Grouping key for aggregation. Same ingredient in different units stays separate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregationKey {
    pub ingredient_id: Uuid,
    pub unit: String,
}

/// Summed requirement for one (ingredient, unit) pair across a whole plan.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedLine {
    pub ingredient_id: Uuid,
    pub ingredient_name: String,
    pub category: Option<String>,
    pub total_quantity: f64,
    pub unit: String,
}

impl From<AggregatedLine> for NewShoppingListItem {
    fn from(l: AggregatedLine) -> Self {
        Self {
            ingredient_id: Some(l.ingredient_id),
            name: l.ingredient_name,
            quantity: Some(l.total_quantity),
            unit: Some(l.unit),
            category: l.category,
            notes: None,
        }
    }
}

/// Running totals keyed by [`AggregationKey`], kept in first-seen order.
#[derive(Debug, Default)]
pub struct Aggregator {
    totals: IndexMap<AggregationKey, f64>,
}

impl Aggregator {
    pub fn add_recipe(&mut self, recipe: &Recipe, scheduled_servings: i32) {
        let multiplier = recipe.multiplier(scheduled_servings);
        for line in &recipe.ingredients {
            let key = AggregationKey {
                ingredient_id: line.ingredient_id,
                unit: line.unit.clone(),
            };
            *self.totals.entry(key).or_insert(0.0) += line.quantity * multiplier;
        }
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn into_totals(self) -> impl Iterator<Item = (AggregationKey, f64)> {
        self.totals.into_iter()
    }
}

/// Rounds half away from zero to `precision` decimal places.
///
/// A positive quantity never rounds down to zero: it is raised to the smallest
/// step of the precision instead. Precision is capped at [`MAX_QUANTITY_PRECISION`].
pub fn round_quantity(quantity: f64, precision: u32) -> f64 {
    let places = i32::try_from(precision.min(MAX_QUANTITY_PRECISION)).unwrap_or(0);
    let factor = 10f64.powi(places);
    let rounded = (quantity * factor).round() / factor;
    if rounded == 0.0 && quantity > 0.0 {
        1.0 / factor
    } else {
        rounded
    }
}

/// Builds a brand-new shopping list from every entry of a meal plan.
///
/// Fails with `NotFound` if the plan does not exist and with `InvalidReference`
/// if an entry points at a recipe (or a recipe at an ingredient) that cannot be
/// resolved. Nothing is written unless every line resolved.
#[instrument(skip(st, list_name))]
pub async fn generate_from_meal_plan(
    st: &AppState,
    meal_plan_id: Uuid,
    list_name: &str,
) -> Result<ShoppingList, AppError> {
    if !st.meal_plans.exists(meal_plan_id).await? {
        warn!(%meal_plan_id, "meal plan not found");
        return Err(AppError::not_found("meal plan", meal_plan_id));
    }

    let entries = st.meal_plans.entries_for(meal_plan_id).await?;

    let mut recipes: HashMap<Uuid, Recipe> = HashMap::new();
    let mut agg = Aggregator::default();
    for entry in &entries {
        if !recipes.contains_key(&entry.recipe_id) {
            let Some(recipe) = st.recipes.get(entry.recipe_id).await? else {
                warn!(%meal_plan_id, recipe_id = %entry.recipe_id, "entry references missing recipe");
                return Err(AppError::invalid_reference("recipe", entry.recipe_id));
            };
            recipes.insert(entry.recipe_id, recipe);
        }
        agg.add_recipe(&recipes[&entry.recipe_id], entry.scheduled_servings);
    }

    let precision = st.config.quantity_precision;
    let mut ingredients: HashMap<Uuid, Ingredient> = HashMap::new();
    let mut items = Vec::with_capacity(agg.len());
    for (key, total) in agg.into_totals() {
        if !ingredients.contains_key(&key.ingredient_id) {
            let Some(ingredient) = st.ingredients.get(key.ingredient_id).await? else {
                warn!(%meal_plan_id, ingredient_id = %key.ingredient_id, "recipe references missing ingredient");
                return Err(AppError::invalid_reference("ingredient", key.ingredient_id));
            };
            ingredients.insert(key.ingredient_id, ingredient);
        }
        let ingredient = &ingredients[&key.ingredient_id];
        items.push(NewShoppingListItem::from(AggregatedLine {
            ingredient_id: key.ingredient_id,
            ingredient_name: ingredient.name.clone(),
            category: ingredient.category.clone(),
            total_quantity: round_quantity(total, precision),
            unit: key.unit,
        }));
    }

    let item_count = items.len();
    let list = st
        .shopping_lists
        .create_with_items(
            NewShoppingList {
                name: list_name.to_string(),
                meal_plan_id: Some(meal_plan_id),
            },
            items,
        )
        .await
        .map_err(|e| {
            error!(error = %e, %meal_plan_id, "create shopping list failed");
            AppError::StoreFailure(e)
        })?;

    info!(
        list_id = %list.id,
        %meal_plan_id,
        entries = entries.len(),
        items = item_count,
        "shopping list generated"
    );
    Ok(list)
}

pub async fn get_with_items(
    st: &AppState,
    list_id: Uuid,
) -> Result<(ShoppingList, Vec<ShoppingListItem>), AppError> {
    let list = st
        .shopping_lists
        .get(list_id)
        .await?
        .ok_or_else(|| AppError::not_found("shopping list", list_id))?;
    let items = st.shopping_lists.items_for(list_id).await?;
    Ok((list, items))
}

#[instrument(skip(st, patch))]
pub async fn update_item(
    st: &AppState,
    list_id: Uuid,
    item_id: Uuid,
    patch: ShoppingListItemPatch,
) -> Result<ShoppingListItem, AppError> {
    if patch.is_empty() {
        return Err(AppError::Validation("no fields to update".into()));
    }
    st.shopping_lists
        .update_item(list_id, item_id, patch)
        .await?
        .ok_or_else(|| AppError::not_found("shopping list item", item_id))
}
