//! Data-access seams consumed by the shopping-list generator.
//!
//! Lookups return `Ok(None)` when the row does not exist and `Err` only when
//! the backing store itself failed.

use async_trait::async_trait;
use uuid::Uuid;

use crate::ingredients::repo_types::Ingredient;
use crate::meal_plans::repo_types::MealPlanEntry;
use crate::recipes::repo_types::Recipe;
use crate::shopping::repo_types::{
    NewShoppingList, NewShoppingListItem, ShoppingList, ShoppingListItem, ShoppingListItemPatch,
};

#[async_trait]
pub trait MealPlanStore: Send + Sync {
    async fn exists(&self, meal_plan_id: Uuid) -> anyhow::Result<bool>;
    async fn entries_for(&self, meal_plan_id: Uuid) -> anyhow::Result<Vec<MealPlanEntry>>;
}

#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn get(&self, recipe_id: Uuid) -> anyhow::Result<Option<Recipe>>;
}

#[async_trait]
pub trait IngredientStore: Send + Sync {
    async fn get(&self, ingredient_id: Uuid) -> anyhow::Result<Option<Ingredient>>;
}

#[async_trait]
pub trait ShoppingListStore: Send + Sync {
    /// Persists the list and every item together, or nothing at all.
    async fn create_with_items(
        &self,
        list: NewShoppingList,
        items: Vec<NewShoppingListItem>,
    ) -> anyhow::Result<ShoppingList>;

    async fn get(&self, list_id: Uuid) -> anyhow::Result<Option<ShoppingList>>;

    async fn items_for(&self, list_id: Uuid) -> anyhow::Result<Vec<ShoppingListItem>>;

    /// Applies only the fields present in `patch`. `None` if the item is not on that list.
    async fn update_item(
        &self,
        list_id: Uuid,
        item_id: Uuid,
        patch: ShoppingListItemPatch,
    ) -> anyhow::Result<Option<ShoppingListItem>>;
}
