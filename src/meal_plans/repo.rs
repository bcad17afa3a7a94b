use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::MealPlanEntry;
use crate::stores::MealPlanStore;

#[derive(Clone)]
pub struct PgMealPlanStore {
    db: PgPool,
}

impl PgMealPlanStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MealPlanStore for PgMealPlanStore {
    async fn exists(&self, meal_plan_id: Uuid) -> anyhow::Result<bool> {
        let (found,): (bool,) =
            sqlx::query_as(r#"SELECT EXISTS (SELECT 1 FROM meal_plans WHERE id = $1)"#)
                .bind(meal_plan_id)
                .fetch_one(&self.db)
                .await
                .context("check meal plan exists")?;
        Ok(found)
    }

    async fn entries_for(&self, meal_plan_id: Uuid) -> anyhow::Result<Vec<MealPlanEntry>> {
        let rows = sqlx::query_as::<_, MealPlanEntry>(
            r#"
            SELECT id, meal_plan_id, recipe_id, servings AS scheduled_servings, date, meal_type
              FROM meal_plan_entries
             WHERE meal_plan_id = $1
             ORDER BY date ASC, created_at ASC
            "#,
        )
        .bind(meal_plan_id)
        .fetch_all(&self.db)
        .await
        .context("list meal plan entries")?;
        Ok(rows)
    }
}
