//! Meal checklist repository for database operations

use crate::models::ChecklistEntry;
use chrono::NaiveDate;
use sqlx::MySqlPool;

/// Meal checklist repository for database operations
pub struct ChecklistRepository;

impl ChecklistRepository {
    /// Get all checklist entries for the given date
    pub async fn list_for_date(
        pool: &MySqlPool,
        date: NaiveDate,
    ) -> Result<Vec<ChecklistEntry>, sqlx::Error> {
        sqlx::query_as::<_, ChecklistEntry>(
            r#"
            SELECT id, date, item, checked
            FROM meal_checklist
            WHERE date = ?
            "#,
        )
        .bind(date)
        .fetch_all(pool)
        .await
    }

    /// Insert a checklist entry, or update `checked` if the (date, item)
    /// pair already exists
    ///
    /// The upsert is a single atomic statement; the row is re-read
    /// afterwards so the caller gets the store-generated id either way.
    pub async fn upsert(
        pool: &MySqlPool,
        date: NaiveDate,
        item: &str,
        checked: bool,
    ) -> Result<ChecklistEntry, sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO meal_checklist (date, item, checked)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE checked = VALUES(checked)
            "#,
        )
        .bind(date)
        .bind(item)
        .bind(checked)
        .execute(pool)
        .await?;

        sqlx::query_as::<_, ChecklistEntry>(
            r#"
            SELECT id, date, item, checked
            FROM meal_checklist
            WHERE date = ? AND item = ?
            "#,
        )
        .bind(date)
        .bind(item)
        .fetch_one(pool)
        .await
    }

    /// Delete the checklist entry for the given (date, item) pair
    ///
    /// Deleting a pair that does not exist is not an error.
    pub async fn delete(
        pool: &MySqlPool,
        date: NaiveDate,
        item: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            DELETE FROM meal_checklist
            WHERE date = ? AND item = ?
            "#,
        )
        .bind(date)
        .bind(item)
        .execute(pool)
        .await?;

        Ok(())
    }
}
