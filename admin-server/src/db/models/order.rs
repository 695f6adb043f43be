//! Order model
//!
//! Line items reference foods by id string; a deleted food does not break
//! the order, it degrades to a placeholder at pricing time.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;
use shared::OrderStatus;

/// A single order line: which food, how many
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct OrderLine {
    /// Referenced food id ("food:<key>")
    #[validate(length(min = 1, message = "a menu item must be selected"))]
    pub food_id: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub quantity: i32,
}

/// Order record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub table_number: i32,
    pub items: Vec<OrderLine>,
    pub status: OrderStatus,
    /// RFC 3339 creation timestamp, set by the server
    pub created_at: Option<String>,
}

impl Order {
    /// Record id rendered as "order:<key>", empty when unsaved
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub table_number: i32,
    #[validate(
        length(min = 1, message = "order must contain at least one item"),
        nested
    )]
    pub items: Vec<OrderLine>,
    /// Defaults to `Pending`
    pub status: Option<OrderStatus>,
}

/// Update order payload (merge semantics)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub table_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 1, message = "order must contain at least one item"),
        nested
    )]
    pub items: Option<Vec<OrderLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}
