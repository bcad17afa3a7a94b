use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;
use uuid::Uuid;

/// One scheduled cooking of a recipe within a meal plan.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MealPlanEntry {
    pub id: Uuid,
    pub meal_plan_id: Uuid,
    pub recipe_id: Uuid,
    pub scheduled_servings: i32, // always > 0, enforced by the schema
    pub date: Date,
    pub meal_type: String,
}
