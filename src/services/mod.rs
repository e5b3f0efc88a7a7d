// bloomshop/src/services/mod.rs

//! Business logic, kept out of the HTTP handlers so it can be exercised
//! directly in tests.

pub mod catalog_service;
pub mod order_service;
pub mod sitemap_service;
pub mod upload_service;
