use anyhow::Context;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::repo_types::{
    NewShoppingList, NewShoppingListItem, ShoppingList, ShoppingListItem, ShoppingListItemPatch,
};
use crate::stores::ShoppingListStore;

#[derive(Clone)]
pub struct PgShoppingListStore {
    db: PgPool,
}

impl PgShoppingListStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Insert one item row within a transaction. `position` fixes its place in the list.
async fn insert_item_tx(
    tx: &mut Transaction<'_, Postgres>,
    list_id: Uuid,
    position: i32,
    item: &NewShoppingListItem,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO shopping_list_items
            (id, shopping_list_id, ingredient_id, name, quantity, unit, category, is_purchased,
             notes, position)
        VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, $8, $9)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(list_id)
    .bind(item.ingredient_id) // Option<Uuid> → NULL allowed
    .bind(&item.name)
    .bind(item.quantity)
    .bind(&item.unit)
    .bind(&item.category)
    .bind(&item.notes)
    .bind(position)
    .execute(&mut **tx)
    .await
    .with_context(|| format!("insert shopping list item {}", item.name))?;
    Ok(())
}

#[async_trait]
impl ShoppingListStore for PgShoppingListStore {
    async fn create_with_items(
        &self,
        list: NewShoppingList,
        items: Vec<NewShoppingListItem>,
    ) -> anyhow::Result<ShoppingList> {
        let mut tx = self.db.begin().await.context("begin tx")?;

        let created = sqlx::query_as::<_, ShoppingList>(
            r#"
            INSERT INTO shopping_lists (id, name, meal_plan_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, meal_plan_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&list.name)
        .bind(list.meal_plan_id)
        .fetch_one(&mut *tx)
        .await
        .context("insert shopping list")?;

        for (idx, item) in items.iter().enumerate() {
            let position = i32::try_from(idx).context("too many shopping list items")?;
            insert_item_tx(&mut tx, created.id, position, item).await?;
        }
        tx.commit().await.context("commit tx")?;

        Ok(created)
    }

    async fn get(&self, list_id: Uuid) -> anyhow::Result<Option<ShoppingList>> {
        let row = sqlx::query_as::<_, ShoppingList>(
            r#"
            SELECT id, name, meal_plan_id, created_at
              FROM shopping_lists
             WHERE id = $1
            "#,
        )
        .bind(list_id)
        .fetch_optional(&self.db)
        .await
        .context("get shopping list")?;
        Ok(row)
    }

    async fn items_for(&self, list_id: Uuid) -> anyhow::Result<Vec<ShoppingListItem>> {
        let rows = sqlx::query_as::<_, ShoppingListItem>(
            r#"
            SELECT id, shopping_list_id, ingredient_id, name, quantity, unit, category,
                   is_purchased, notes
              FROM shopping_list_items
             WHERE shopping_list_id = $1
             ORDER BY position ASC, created_at ASC
            "#,
        )
        .bind(list_id)
        .fetch_all(&self.db)
        .await
        .context("list shopping list items")?;
        Ok(rows)
    }

    async fn update_item(
        &self,
        list_id: Uuid,
        item_id: Uuid,
        patch: ShoppingListItemPatch,
    ) -> anyhow::Result<Option<ShoppingListItem>> {
        let row = sqlx::query_as::<_, ShoppingListItem>(
            r#"
            UPDATE shopping_list_items
               SET quantity     = COALESCE($3, quantity),
                   unit         = COALESCE($4, unit),
                   category     = COALESCE($5, category),
                   notes        = COALESCE($6, notes),
                   is_purchased = COALESCE($7, is_purchased)
             WHERE id = $1 AND shopping_list_id = $2
            RETURNING id, shopping_list_id, ingredient_id, name, quantity, unit, category,
                      is_purchased, notes
            "#,
        )
        .bind(item_id)
        .bind(list_id)
        .bind(patch.quantity)
        .bind(patch.unit)
        .bind(patch.category)
        .bind(patch.notes)
        .bind(patch.is_purchased)
        .fetch_optional(&self.db)
        .await
        .context("update shopping list item")?;
        Ok(row)
    }
}
