//! Data access layer
//!
//! Each repository issues parameterized SQL against the shared MySQL pool.
//! There are no transactions: every call is independent and autocommitted,
//! and the checklist upsert is atomic on its own.

mod checklist;
mod weight;

pub use checklist::ChecklistRepository;
pub use weight::WeightRepository;
