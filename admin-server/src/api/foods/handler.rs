//! Food API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::{ApiResponse, DietaryType, FoodCategory};

use crate::core::ServerState;
use crate::db::models::{Food, FoodCreate, FoodUpdate};
use crate::db::repository::{FoodRepository, Repository};
use crate::filters::FoodFilter;
use crate::utils::{AppError, AppJson, AppResult, ok, validation};

/// Query criteria for GET /api/foods
#[derive(Debug, Default, Deserialize)]
pub struct FoodListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub dietary: Option<String>,
    pub available: Option<bool>,
}

impl FoodListQuery {
    /// Parse enum criteria; unknown values are a 400, not an empty result
    fn into_filter(self) -> AppResult<FoodFilter> {
        let category = self
            .category
            .filter(|c| !c.is_empty())
            .map(|c| c.parse::<FoodCategory>())
            .transpose()
            .map_err(|e| AppError::invalid(e.to_string()))?;
        let dietary = self
            .dietary
            .filter(|d| !d.is_empty())
            .map(|d| d.parse::<DietaryType>())
            .transpose()
            .map_err(|e| AppError::invalid(e.to_string()))?;

        Ok(FoodFilter {
            search: self.search,
            category,
            dietary,
            available: self.available,
        })
    }
}

/// GET /api/foods - 获取菜品列表 (可选筛选)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<FoodListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Food>>>> {
    let filter = query.into_filter()?;

    let repo = FoodRepository::new(state.db.clone());
    let foods = repo.find_all().await?;

    Ok(ok(filter.apply(foods)))
}

/// GET /api/foods/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Food>>> {
    let repo = FoodRepository::new(state.db.clone());
    let food = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Food {}", id)))?;

    Ok(ok(food))
}

/// POST /api/foods - 创建菜品
///
/// 校验失败时直接拒绝，不触达数据库
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<FoodCreate>,
) -> AppResult<Json<ApiResponse<Food>>> {
    validation::check(&payload)?;

    let repo = FoodRepository::new(state.db.clone());
    let food = repo.create(payload).await?;

    tracing::info!(id = %food.id_string(), name = %food.name, "Food created");

    Ok(ok(food))
}

/// PUT /api/foods/:id - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<FoodUpdate>,
) -> AppResult<Json<ApiResponse<Food>>> {
    validation::check(&payload)?;

    let repo = FoodRepository::new(state.db.clone());
    let food = repo.update(&id, payload).await?;

    tracing::info!(id = %id, "Food updated");

    Ok(ok(food))
}

/// DELETE /api/foods/:id - 删除菜品
///
/// 订单中对该菜品的引用在计价时降级为占位行
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let repo = FoodRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await?;

    if !deleted {
        return Err(AppError::not_found(format!("Food {}", id)));
    }

    tracing::info!(id = %id, "Food deleted");

    Ok(ok(true))
}
