//! Weight repository for database operations

use crate::models::WeightEntry;
use chrono::NaiveDate;
use sqlx::MySqlPool;

/// Weight repository for database operations
pub struct WeightRepository;

impl WeightRepository {
    /// Get all weight entries, ordered by date ascending
    pub async fn list(pool: &MySqlPool) -> Result<Vec<WeightEntry>, sqlx::Error> {
        sqlx::query_as::<_, WeightEntry>(
            r#"
            SELECT id, date, value
            FROM weights
            ORDER BY date
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a new weight entry and return it with the generated id
    pub async fn insert(
        pool: &MySqlPool,
        date: NaiveDate,
        value: f64,
    ) -> Result<WeightEntry, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO weights (date, value)
            VALUES (?, ?)
            "#,
        )
        .bind(date)
        .bind(value)
        .execute(pool)
        .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(WeightEntry { id, date, value })
    }

    /// Delete a weight entry by id
    ///
    /// Deleting an id that does not exist is not an error.
    pub async fn delete_by_id(pool: &MySqlPool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            DELETE FROM weights
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(())
    }
}
