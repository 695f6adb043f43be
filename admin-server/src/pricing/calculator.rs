//! Order Total Calculator
//!
//! Resolve each line against the menu, sum line totals into a subtotal,
//! apply the flat tax rate. A line whose food no longer exists contributes
//! zero under the placeholder name instead of failing — orders must stay
//! readable after menu edits.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::db::models::{Food, OrderLine};

/// Flat tax rate applied to the subtotal (10%)
pub const DEFAULT_TAX_RATE: f64 = 0.10;

/// Display name for lines whose referenced food is gone
pub const UNKNOWN_ITEM_NAME: &str = "Unknown Item";

const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for precise calculation
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Menu entry the calculator resolves line items against
#[derive(Debug, Clone)]
pub struct MenuPrice {
    pub name: String,
    pub price: f64,
}

/// Build a price lookup keyed by "food:<key>" id strings
pub fn price_lookup(foods: &[Food]) -> HashMap<String, MenuPrice> {
    foods
        .iter()
        .filter(|f| f.id.is_some())
        .map(|f| {
            (
                f.id_string(),
                MenuPrice {
                    name: f.name.clone(),
                    price: f.price,
                },
            )
        })
        .collect()
}

/// A priced order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricedLine {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub line_total: f64,
}

/// Result of order total calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderTotals {
    pub lines: Vec<PricedLine>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Calculate an order's subtotal, tax and total against the current menu
///
/// # Arguments
/// * `items` - the order's line items
/// * `lookup` - current menu prices keyed by food id (see [`price_lookup`])
/// * `tax_rate` - flat rate applied to the subtotal (0.10 = 10%)
///
/// # Guarantees
/// - `total == subtotal + tax` and `total >= subtotal >= 0`
/// - unresolved lines price at 0 under [`UNKNOWN_ITEM_NAME`]
pub fn calculate_order_totals(
    items: &[OrderLine],
    lookup: &HashMap<String, MenuPrice>,
    tax_rate: f64,
) -> OrderTotals {
    let mut subtotal = Decimal::ZERO;
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        let (name, price) = match lookup.get(&item.food_id) {
            Some(entry) => (entry.name.clone(), to_decimal(entry.price)),
            None => (UNKNOWN_ITEM_NAME.to_string(), Decimal::ZERO),
        };

        let line_total = price * Decimal::from(item.quantity);
        subtotal += line_total;

        lines.push(PricedLine {
            name,
            quantity: item.quantity,
            price: to_f64(price),
            line_total: to_f64(line_total),
        });
    }

    let tax = subtotal * to_decimal(tax_rate);
    let total = subtotal + tax;

    OrderTotals {
        lines,
        subtotal: to_f64(subtotal),
        tax: to_f64(tax),
        total: to_f64(total),
    }
}

// ==================== Tests ====================
