//! Restaurant Admin Server - 餐厅后台管理服务
//!
//! # 架构概述
//!
//! 为后台管理面板提供 RESTful API：
//!
//! - **菜单管理** (`api::foods`): 菜品 CRUD 与筛选
//! - **订单管理** (`api::orders`): 订单 CRUD、状态流转与计价
//! - **统计分析** (`api::statistics`): 营收、热门菜品、趋势
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repositories)
//! ├── pricing/       # 订单计价 (小计、税、合计)
//! ├── filters.rs     # 集合筛选谓词
//! └── utils/         # 错误、日志、校验工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod filters;
pub mod pricing;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use pricing::{DEFAULT_TAX_RATE, OrderTotals, calculate_order_totals};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
