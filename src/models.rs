//! Entity model shared between the HTTP layer and the repositories
//!
//! JSON field names match the column names one to one; dates travel as
//! "YYYY-MM-DD" strings in both directions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single body-weight measurement
///
/// Multiple entries may exist for the same date; rows are never updated
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WeightEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub value: f64,
}

/// Request payload for creating a weight entry
///
/// `date` may be omitted, in which case the server's current date is used.
#[derive(Debug, Clone, Deserialize)]
pub struct NewWeightEntry {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub value: f64,
}

/// One meal-checklist row
///
/// The (date, item) pair is unique; writes go through an upsert and the
/// date is always the server's current date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChecklistEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub item: String,
    pub checked: bool,
}

/// Request payload for checking or unchecking a meal item
#[derive(Debug, Clone, Deserialize)]
pub struct NewChecklistEntry {
    pub item: String,
    pub checked: bool,
}

/// Plain confirmation body returned by the DELETE endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
