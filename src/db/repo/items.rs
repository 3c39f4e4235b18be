//! Default item collection.

use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use crate::domain::{Item, ItemId};
use crate::error::StoreError;

/// CRUD over the `items` collection.
#[derive(Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Every item in the default collection, in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name
            FROM items
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<Item, StoreError> {
                let id: String = row.get("id");
                Ok(Item {
                    id: id.parse()?,
                    name: row.get("name"),
                })
            })
            .collect()
    }

    /// Insert several items in one transaction; either all land or none do.
    ///
    /// # Errors
    /// Returns an error if the transaction fails.
    pub async fn insert_many(&self, items: &[Item]) -> Result<(), StoreError> {
        if items.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for item in items {
            sqlx::query("INSERT INTO items (id, name) VALUES (?, ?)")
                .bind(item.id.as_str())
                .bind(item.name.as_str())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        Ok(())
    }

    /// Persist a new item named `name`, stored verbatim.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_one(&self, name: &str) -> Result<Item, StoreError> {
        let item = Item::new(name);
        sqlx::query("INSERT INTO items (id, name) VALUES (?, ?)")
            .bind(item.id.as_str())
            .bind(item.name.as_str())
            .execute(&self.pool)
            .await?;
        Ok(item)
    }

    /// Remove the item with the given id.
    ///
    /// Returns `false` when no such item exists.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidId` if `raw_id` is not a store id, or a
    /// database error if the delete fails.
    pub async fn delete_by_id(&self, raw_id: &str) -> Result<bool, StoreError> {
        let id: ItemId = raw_id.parse()?;
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[cfg(test)]
    pub(crate) async fn count(&self) -> Result<i64, StoreError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}
