// bloomshop/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod pages;
pub mod routes;

// Re-export so main.rs and tests can reach the routing configuration directly.
pub use routes::configure_app_routes;
