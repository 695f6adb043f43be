//! Domain model types
//!
//! Enums shared between the admin server and clients. Database records and
//! request payloads live in the server crate; only the vocabulary lives here.

pub mod food;
pub mod order;

pub use food::{DietaryType, FoodCategory};
pub use order::OrderStatus;

/// Error returned when parsing a domain enum from a string
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct InvalidEnumValue {
    pub kind: &'static str,
    pub value: String,
}

impl InvalidEnumValue {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
