//! Order Pricing Module
//!
//! Subtotal, tax and total are derived at read time from an order's line
//! items and the current menu; they are never persisted. The tax rate and
//! the formula live here and nowhere else.

mod calculator;

pub use calculator::*;
