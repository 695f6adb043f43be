//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use shared::{ApiResponse, OrderStatus};

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderLine, OrderUpdate};
use crate::db::repository::{FoodRepository, OrderRepository, Repository};
use crate::filters::OrderFilter;
use crate::pricing::{OrderTotals, calculate_order_totals, price_lookup};
use crate::utils::{AppError, AppJson, AppResult, ok, validation};

/// Query criteria for GET /api/orders
#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
    /// Substring of the table number
    pub table: Option<String>,
}

impl OrderListQuery {
    fn into_filter(self) -> AppResult<OrderFilter> {
        let status = self
            .status
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<OrderStatus>())
            .transpose()
            .map_err(|e| AppError::invalid(e.to_string()))?;

        Ok(OrderFilter {
            status,
            table: self.table,
        })
    }
}

/// Order with derived totals, returned by the detail endpoint
#[derive(Debug, Serialize)]
pub struct OrderDetail {
    pub id: String,
    pub table_number: i32,
    pub status: OrderStatus,
    pub created_at: Option<String>,
    pub items: Vec<OrderLine>,
    pub totals: OrderTotals,
}

/// GET /api/orders - 获取订单列表 (可选筛选)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let filter = query.into_filter()?;

    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_all().await?;

    Ok(ok(filter.apply(orders)))
}

/// GET /api/orders/:id - 获取订单详情 (含计价)
///
/// 小计、税、合计按当前菜单即时计算，不做持久化
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    let order_repo = OrderRepository::new(state.db.clone());
    let order = order_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {}", id)))?;

    let food_repo = FoodRepository::new(state.db.clone());
    let foods = food_repo.find_all().await?;
    let lookup = price_lookup(&foods);

    let totals = calculate_order_totals(&order.items, &lookup, state.tax_rate());

    Ok(ok(OrderDetail {
        id: order.id_string(),
        table_number: order.table_number,
        status: order.status,
        created_at: order.created_at,
        items: order.items,
        totals,
    }))
}

/// POST /api/orders - 创建订单
///
/// 校验失败时直接拒绝，不触达数据库
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> AppResult<Json<ApiResponse<Order>>> {
    validation::check(&payload)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(payload).await?;

    tracing::info!(
        id = %order.id_string(),
        table = order.table_number,
        "Order created"
    );

    Ok(ok(order))
}

/// PUT /api/orders/:id - 更新订单
///
/// 状态设为 Cancelled 时保留记录 (软取消)；删除是独立操作
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<OrderUpdate>,
) -> AppResult<Json<ApiResponse<Order>>> {
    validation::check(&payload)?;

    let cancelled = payload.status == Some(OrderStatus::Cancelled);

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.update(&id, payload).await?;

    if cancelled {
        tracing::info!(id = %id, "Order cancelled");
    } else {
        tracing::info!(id = %id, status = %order.status, "Order updated");
    }

    Ok(ok(order))
}

/// DELETE /api/orders/:id - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = OrderRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await?;

    if !deleted {
        return Err(AppError::not_found(format!("Order {}", id)));
    }

    tracing::info!(id = %id, "Order deleted");

    Ok(ok(true))
}
