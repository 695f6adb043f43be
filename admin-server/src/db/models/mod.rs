//! Database record models and request payloads

pub mod food;
pub mod order;
pub mod serde_helpers;

pub use food::{Food, FoodCreate, FoodUpdate};
pub use order::{Order, OrderCreate, OrderLine, OrderUpdate};
