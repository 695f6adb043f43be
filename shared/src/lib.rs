//! Shared types for the restaurant admin backend
//!
//! Common types used across crates: domain enums, error codes and the
//! unified API response envelope.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use error::ApiErrorCode;
pub use models::{DietaryType, FoodCategory, OrderStatus};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
