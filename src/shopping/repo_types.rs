use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Shopping list record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShoppingList {
    pub id: Uuid,
    pub name: String,
    pub meal_plan_id: Option<Uuid>, // source plan, if generated
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ShoppingListItem {
    pub id: Uuid,
    pub shopping_list_id: Uuid,
    pub ingredient_id: Option<Uuid>,
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub is_purchased: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewShoppingList {
    pub name: String,
    pub meal_plan_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewShoppingListItem {
    pub ingredient_id: Option<Uuid>,
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
}

/// Partial update of a shopping-list item; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShoppingListItemPatch {
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub is_purchased: Option<bool>,
}

impl ShoppingListItemPatch {
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none()
            && self.unit.is_none()
            && self.category.is_none()
            && self.notes.is_none()
            && self.is_purchased.is_none()
    }

    pub fn apply(self, item: &mut ShoppingListItem) {
        if let Some(q) = self.quantity {
            item.quantity = Some(q);
        }
        if let Some(u) = self.unit {
            item.unit = Some(u);
        }
        if let Some(c) = self.category {
            item.category = Some(c);
        }
        if let Some(n) = self.notes {
            item.notes = Some(n);
        }
        if let Some(p) = self.is_purchased {
            item.is_purchased = p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ShoppingListItem {
        ShoppingListItem {
            id: Uuid::new_v4(),
            shopping_list_id: Uuid::new_v4(),
            ingredient_id: Some(Uuid::new_v4()),
            name: "flour".into(),
            quantity: Some(2.0),
            unit: Some("cup".into()),
            category: Some("baking".into()),
            is_purchased: false,
            notes: None,
        }
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let mut it = item();
        let before = it.clone();
        let patch: ShoppingListItemPatch =
            serde_json::from_str(r#"{"is_purchased": true, "notes": "organic"}"#).unwrap();
        patch.apply(&mut it);

        assert!(it.is_purchased);
        assert_eq!(it.notes.as_deref(), Some("organic"));
        assert_eq!(it.quantity, before.quantity);
        assert_eq!(it.unit, before.unit);
        assert_eq!(it.category, before.category);
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let res = serde_json::from_str::<ShoppingListItemPatch>(r#"{"shopping_list_id": "x"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(ShoppingListItemPatch::default().is_empty());
        let patch = ShoppingListItemPatch {
            quantity: Some(3.0),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
