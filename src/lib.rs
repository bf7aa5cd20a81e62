//! BMI Tracker Backend Library
//!
//! This library exposes the backend modules for use in tests.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
