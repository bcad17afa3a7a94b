use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{Recipe, RecipeIngredientLine};
use crate::stores::RecipeStore;

#[derive(Clone)]
pub struct PgRecipeStore {
    db: PgPool,
}

impl PgRecipeStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn get(&self, recipe_id: Uuid) -> anyhow::Result<Option<Recipe>> {
        let row: Option<(Option<i32>,)> =
            sqlx::query_as(r#"SELECT servings FROM recipes WHERE id = $1"#)
                .bind(recipe_id)
                .fetch_optional(&self.db)
                .await
                .context("get recipe")?;
        let Some((servings,)) = row else {
            return Ok(None);
        };

        let ingredients = sqlx::query_as::<_, RecipeIngredientLine>(
            r#"
            SELECT ingredient_id, quantity, unit, notes
              FROM recipe_ingredients
             WHERE recipe_id = $1
             ORDER BY position ASC
            "#,
        )
        .bind(recipe_id)
        .fetch_all(&self.db)
        .await
        .with_context(|| format!("list ingredients of recipe {}", recipe_id))?;

        Ok(Some(Recipe {
            id: recipe_id,
            servings,
            ingredients,
        }))
    }
}
