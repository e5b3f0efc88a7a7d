// bloomshop/src/web/handlers/mod.rs

// Declare handler modules
pub mod catalog_handlers;
pub mod order_handlers;
pub mod seo_handlers;
pub mod upload_handlers;
