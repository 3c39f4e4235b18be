//! Named list collection.
//!
//! Each list row embeds its items as a JSON array, so a list and its
//! entries are read and written as one document.

use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use crate::domain::{Item, ListId, TodoList};
use crate::error::StoreError;

/// CRUD over the `lists` collection.
#[derive(Clone)]
pub struct ListRepository {
    pool: SqlitePool,
}

impl ListRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ListRepository { pool }
    }

    /// Exact, case-sensitive lookup by name.
    ///
    /// Names are not unique in storage; when several lists share a name the
    /// oldest one is returned.
    ///
    /// # Errors
    /// Returns an error if the query fails or the stored items cannot be decoded.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<TodoList>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, items
            FROM lists
            WHERE name = ?
            ORDER BY seq ASC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: String = row.get("id");
        let items_json: String = row.get("items");
        let items: Vec<Item> =
            serde_json::from_str(&items_json).map_err(|e| StoreError::Corrupt {
                id: id.clone(),
                reason: e.to_string(),
            })?;

        Ok(Some(TodoList {
            id: ListId::from_stored(id),
            name: row.get("name"),
            items,
        }))
    }

    /// Create a list called `name` holding copies of `items` under fresh ids.
    ///
    /// There is no uniqueness check here: callers look up first, and two
    /// concurrent creations of the same name both succeed.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_one(&self, name: &str, items: &[Item]) -> Result<TodoList, StoreError> {
        let list = TodoList {
            id: ListId::generate(),
            name: name.to_string(),
            items: items.iter().map(Item::duplicate).collect(),
        };
        let items_json = serde_json::to_string(&list.items).map_err(|e| StoreError::Corrupt {
            id: list.id.to_string(),
            reason: e.to_string(),
        })?;

        sqlx::query("INSERT INTO lists (id, name, items) VALUES (?, ?, ?)")
            .bind(list.id.as_str())
            .bind(list.name.as_str())
            .bind(items_json)
            .execute(&self.pool)
            .await?;

        Ok(list)
    }

    #[cfg(test)]
    pub(crate) async fn count_by_name(&self, name: &str) -> Result<i64, StoreError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lists WHERE name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}
