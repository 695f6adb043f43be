//! Statistics API 模块

mod handler;

pub use handler::{OverviewStats, RevenuePoint, StatisticsResponse, TopItem};

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/statistics", get(handler::statistics))
}
