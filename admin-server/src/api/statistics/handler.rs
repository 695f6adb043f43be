//! Statistics API Handlers
//!
//! Aggregates the analytics page's metrics server-side: revenue, order
//! counts, active tables, popular items and the per-day revenue trend.
//! Cancelled orders are excluded from every revenue figure.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{ApiResponse, OrderStatus};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::core::ServerState;
use crate::db::models::{Food, Order};
use crate::db::repository::{FoodRepository, OrderRepository, Repository};
use crate::pricing::{
    MenuPrice, UNKNOWN_ITEM_NAME, calculate_order_totals, price_lookup, to_decimal, to_f64,
};
use crate::utils::{AppResult, ok};

// ============================================================================
// Response Types
// ============================================================================

/// Overview statistics
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OverviewStats {
    pub total_orders: i64,
    pub total_revenue: f64,
    pub avg_order_value: f64,
    /// Distinct table numbers with a Pending or Preparing order
    pub active_tables: i64,
}

/// Top item by summed quantity
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopItem {
    pub name: String,
    pub quantity: i64,
}

/// Revenue trend data point (one per calendar day)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RevenuePoint {
    pub date: String,
    pub value: f64,
}

/// Full statistics response
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsResponse {
    pub overview: OverviewStats,
    pub status_counts: BTreeMap<String, i64>,
    pub top_items: Vec<TopItem>,
    pub revenue_trend: Vec<RevenuePoint>,
}

const TOP_ITEMS_LIMIT: usize = 5;

// ============================================================================
// Handler
// ============================================================================

/// GET /api/statistics - 统计概览
pub async fn statistics(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<StatisticsResponse>>> {
    let food_repo = FoodRepository::new(state.db.clone());
    let order_repo = OrderRepository::new(state.db.clone());

    let foods = food_repo.find_all().await?;
    let orders = order_repo.find_all().await?;

    Ok(ok(compute_statistics(&foods, &orders, state.tax_rate())))
}

/// Pure aggregation over the fetched collections
pub fn compute_statistics(foods: &[Food], orders: &[Order], tax_rate: f64) -> StatisticsResponse {
    let lookup = price_lookup(foods);

    let mut revenue = Decimal::ZERO;
    let mut billed_orders: i64 = 0;
    let mut status_counts: BTreeMap<String, i64> = BTreeMap::new();
    let mut active_tables: HashSet<i32> = HashSet::new();
    let mut quantity_by_food: HashMap<String, i64> = HashMap::new();
    let mut trend: BTreeMap<String, Decimal> = BTreeMap::new();

    for order in orders {
        *status_counts.entry(order.status.to_string()).or_insert(0) += 1;

        if order.status.is_active() {
            active_tables.insert(order.table_number);
        }

        if order.status == OrderStatus::Cancelled {
            continue;
        }

        let totals = calculate_order_totals(&order.items, &lookup, tax_rate);
        let total = to_decimal(totals.total);
        revenue += total;
        billed_orders += 1;

        if let Some(date) = created_date(order) {
            *trend.entry(date).or_insert(Decimal::ZERO) += total;
        }

        for item in &order.items {
            *quantity_by_food.entry(item.food_id.clone()).or_insert(0) += item.quantity as i64;
        }
    }

    let avg_order_value = if billed_orders > 0 {
        revenue / Decimal::from(billed_orders)
    } else {
        Decimal::ZERO
    };

    StatisticsResponse {
        overview: OverviewStats {
            total_orders: orders.len() as i64,
            total_revenue: to_f64(revenue),
            avg_order_value: to_f64(avg_order_value),
            active_tables: active_tables.len() as i64,
        },
        status_counts,
        top_items: top_items(&quantity_by_food, &lookup),
        revenue_trend: trend
            .into_iter()
            .map(|(date, value)| RevenuePoint {
                date,
                value: to_f64(value),
            })
            .collect(),
    }
}

/// "YYYY-MM-DD" part of the creation timestamp
fn created_date(order: &Order) -> Option<String> {
    order
        .created_at
        .as_ref()
        .and_then(|ts| ts.get(0..10))
        .map(str::to_string)
}

fn top_items(
    quantity_by_food: &HashMap<String, i64>,
    lookup: &HashMap<String, MenuPrice>,
) -> Vec<TopItem> {
    let mut items: Vec<TopItem> = quantity_by_food
        .iter()
        .map(|(food_id, quantity)| TopItem {
            name: lookup
                .get(food_id)
                .map(|entry| entry.name.clone())
                .unwrap_or_else(|| UNKNOWN_ITEM_NAME.to_string()),
            quantity: *quantity,
        })
        .collect();

    // Stable order for equal quantities
    items.sort_by(|a, b| b.quantity.cmp(&a.quantity).then(a.name.cmp(&b.name)));
    items.truncate(TOP_ITEMS_LIMIT);
    items
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::OrderLine;
    use shared::{DietaryType, FoodCategory};
    use surrealdb::RecordId;

    fn food(key: &str, name: &str, price: f64) -> Food {
        Food {
            id: Some(RecordId::from_table_key("food", key)),
            name: name.to_string(),
            category: FoodCategory::Main,
            price,
            dietary: DietaryType::NonVegetarian,
            availability: true,
            description: None,
            origin: None,
            flavor: None,
            serving_size: None,
            image_url: None,
            preparation_time: None,
            rating: None,
            spice_level: None,
            ingredients: vec![],
            tags: vec![],
            calories: None,
            protein: None,
            carbs: None,
            fats: None,
            created_at: None,
        }
    }

    fn order(
        table_number: i32,
        status: OrderStatus,
        created_at: &str,
        items: Vec<(&str, i32)>,
    ) -> Order {
        Order {
            id: None,
            table_number,
            items: items
                .into_iter()
                .map(|(food_id, quantity)| OrderLine {
                    food_id: food_id.to_string(),
                    quantity,
                })
                .collect(),
            status,
            created_at: Some(created_at.to_string()),
        }
    }

    #[test]
    fn cancelled_orders_are_excluded_from_revenue() {
        let foods = vec![food("a", "Kottu", 500.0)];
        let orders = vec![
            order(1, OrderStatus::Completed, "2026-08-01T10:00:00Z", vec![("food:a", 2)]),
            order(2, OrderStatus::Cancelled, "2026-08-01T11:00:00Z", vec![("food:a", 9)]),
        ];

        let stats = compute_statistics(&foods, &orders, 0.10);

        // One billed order: subtotal 1000, tax 100
        assert_eq!(stats.overview.total_revenue, 1100.0);
        assert_eq!(stats.overview.total_orders, 2);
        assert_eq!(stats.overview.avg_order_value, 1100.0);
        assert_eq!(stats.status_counts["Cancelled"], 1);
    }

    #[test]
    fn active_tables_are_distinct_pending_or_preparing() {
        let foods = vec![food("a", "Kottu", 100.0)];
        let orders = vec![
            order(5, OrderStatus::Pending, "2026-08-01T10:00:00Z", vec![("food:a", 1)]),
            order(5, OrderStatus::Preparing, "2026-08-01T11:00:00Z", vec![("food:a", 1)]),
            order(7, OrderStatus::Completed, "2026-08-01T12:00:00Z", vec![("food:a", 1)]),
        ];

        let stats = compute_statistics(&foods, &orders, 0.10);
        assert_eq!(stats.overview.active_tables, 1);
    }

    #[test]
    fn top_items_rank_by_quantity_and_degrade_missing_names() {
        let foods = vec![food("a", "Kottu", 100.0), food("b", "Roti", 50.0)];
        let orders = vec![
            order(1, OrderStatus::Completed, "2026-08-01T10:00:00Z", vec![
                ("food:a", 2),
                ("food:b", 5),
            ]),
            order(2, OrderStatus::Pending, "2026-08-02T10:00:00Z", vec![(
                "food:gone",
                7,
            )]),
        ];

        let stats = compute_statistics(&foods, &orders, 0.10);
        assert_eq!(stats.top_items[0].name, UNKNOWN_ITEM_NAME);
        assert_eq!(stats.top_items[0].quantity, 7);
        assert_eq!(stats.top_items[1].name, "Roti");
    }

    #[test]
    fn revenue_trend_groups_by_day() {
        let foods = vec![food("a", "Kottu", 100.0)];
        let orders = vec![
            order(1, OrderStatus::Completed, "2026-08-01T10:00:00Z", vec![("food:a", 1)]),
            order(2, OrderStatus::Completed, "2026-08-01T20:00:00Z", vec![("food:a", 1)]),
            order(3, OrderStatus::Completed, "2026-08-02T09:00:00Z", vec![("food:a", 1)]),
        ];

        let stats = compute_statistics(&foods, &orders, 0.10);
        assert_eq!(stats.revenue_trend.len(), 2);
        assert_eq!(stats.revenue_trend[0].date, "2026-08-01");
        assert_eq!(stats.revenue_trend[0].value, 220.0);
        assert_eq!(stats.revenue_trend[1].value, 110.0);
    }

    #[test]
    fn empty_collections_yield_zeroes() {
        let stats = compute_statistics(&[], &[], 0.10);
        assert_eq!(stats.overview.total_orders, 0);
        assert_eq!(stats.overview.total_revenue, 0.0);
        assert_eq!(stats.overview.avg_order_value, 0.0);
        assert!(stats.top_items.is_empty());
        assert!(stats.revenue_trend.is_empty());
    }
}
