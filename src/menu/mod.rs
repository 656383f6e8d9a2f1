//! Restaurant Menu Domain Module
//!
//! This module contains all menu business logic, including:
//! - Domain models (Dish, Course, selectors, averages)
//! - Business logic helpers (draft validation, id generation, formatting)
//! - The menu store and application state
//! - REST API handlers

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use error::MenuError;
pub use handlers::routes;
pub use state::{AppState, MenuStore, SharedState};
