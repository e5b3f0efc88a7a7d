// bloomshop/src/models/mod.rs

//! Contains data structures representing database entities.

// Declare child modules for each model
pub mod market;
pub mod order;

// Re-export the model structs for convenient access
pub use market::{Market, NewMarket};
pub use order::{Order, OrderDraft, OrderStatus};
