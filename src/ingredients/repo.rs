use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::Ingredient;
use crate::stores::IngredientStore;

#[derive(Clone)]
pub struct PgIngredientStore {
    db: PgPool,
}

impl PgIngredientStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IngredientStore for PgIngredientStore {
    async fn get(&self, ingredient_id: Uuid) -> anyhow::Result<Option<Ingredient>> {
        let row = sqlx::query_as::<_, Ingredient>(
            r#"SELECT id, name, category FROM ingredients WHERE id = $1"#,
        )
        .bind(ingredient_id)
        .fetch_optional(&self.db)
        .await
        .context("get ingredient")?;
        Ok(row)
    }
}
