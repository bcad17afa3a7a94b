use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::config::AppConfig;
use crate::ingredients::repo::PgIngredientStore;
use crate::meal_plans::repo::PgMealPlanStore;
use crate::recipes::repo::PgRecipeStore;
use crate::shopping::repo::PgShoppingListStore;
use crate::stores::{IngredientStore, MealPlanStore, RecipeStore, ShoppingListStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub meal_plans: Arc<dyn MealPlanStore>,
    pub recipes: Arc<dyn RecipeStore>,
    pub ingredients: Arc<dyn IngredientStore>,
    pub shopping_lists: Arc<dyn ShoppingListStore>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        Ok(Self::from_parts(
            config,
            Arc::new(PgMealPlanStore::new(db.clone())),
            Arc::new(PgRecipeStore::new(db.clone())),
            Arc::new(PgIngredientStore::new(db.clone())),
            Arc::new(PgShoppingListStore::new(db)),
        ))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        meal_plans: Arc<dyn MealPlanStore>,
        recipes: Arc<dyn RecipeStore>,
        ingredients: Arc<dyn IngredientStore>,
        shopping_lists: Arc<dyn ShoppingListStore>,
    ) -> Self {
        Self {
            config,
            meal_plans,
            recipes,
            ingredients,
            shopping_lists,
        }
    }
}
