//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`config`] - 面板配置
//! - [`foods`] - 菜单管理接口
//! - [`orders`] - 订单管理接口
//! - [`statistics`] - 统计分析接口

pub mod config;
pub mod foods;
pub mod health;
pub mod orders;
pub mod statistics;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build the full application router
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(config::router())
        .merge(foods::router())
        .merge(orders::router())
        .merge(statistics::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult, ok};
