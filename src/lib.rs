// bloomshop/src/lib.rs

//! Bloomshop: catalog and order backend for a small flower/plant shop.
//!
//! The crate covers:
//!  - A `market` catalog of items, each addressable by a unique URL keyword.
//!  - Server-rendered landing pages (home, per-item detail, price calculator).
//!  - Sitemap and robots.txt generation for search-engine discovery.
//!  - Bulk catalog ingest from an uploaded CSV export.
//!  - Order intake with a READY -> PAID / CANCELED lifecycle.

// Declare modules according to the planned structure
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

// --- Re-exports for the Public API ---

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
