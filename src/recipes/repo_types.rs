use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Ingredient requirement at the recipe's own serving size.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecipeIngredientLine {
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub servings: Option<i32>,
    pub ingredients: Vec<RecipeIngredientLine>,
}

impl Recipe {
    /// Serving count the ingredient quantities are declared against.
    /// Missing or non-positive counts are treated as 1.
    pub fn effective_base_servings(&self) -> i32 {
        match self.servings {
            Some(n) if n > 0 => n,
            _ => 1,
        }
    }

    pub fn multiplier(&self, scheduled_servings: i32) -> f64 {
        f64::from(scheduled_servings) / f64::from(self.effective_base_servings())
    }
}
