//! Panel configuration API 模块
//!
//! 面板展示用的运行配置：货币代码、税率

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use shared::ApiResponse;

use crate::core::ServerState;
use crate::utils::ok;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/config", get(panel_config))
}

/// Display settings the panel reads at startup
#[derive(Debug, Serialize)]
pub struct PanelConfig {
    /// Currency code shown next to prices (display only)
    pub currency: String,
    /// Flat tax rate applied to order subtotals (0.10 = 10%)
    pub tax_rate: f64,
}

/// GET /api/config - 面板配置
pub async fn panel_config(State(state): State<ServerState>) -> Json<ApiResponse<PanelConfig>> {
    ok(PanelConfig {
        currency: state.config.currency.clone(),
        tax_rate: state.config.tax_rate,
    })
}
