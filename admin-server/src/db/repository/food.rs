//! Food Repository

use super::{BaseRepository, RepoError, RepoResult, Repository, parse_record_id};
use crate::db::models::{Food, FoodCreate, FoodUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const FOOD_TABLE: &str = "food";

#[derive(Clone)]
pub struct FoodRepository {
    base: BaseRepository,
}

impl FoodRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

impl Repository<Food, FoodCreate, FoodUpdate> for FoodRepository {
    /// Find all foods, oldest first
    async fn find_all(&self) -> RepoResult<Vec<Food>> {
        let mut foods: Vec<Food> = self.base.db().select(FOOD_TABLE).await?;
        foods.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(foods)
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Food>> {
        let record_id = parse_record_id(FOOD_TABLE, id)?;
        let food: Option<Food> = self.base.db().select(record_id).await?;
        Ok(food)
    }

    async fn create(&self, data: FoodCreate) -> RepoResult<Food> {
        let food = Food::from_create(data, chrono::Utc::now().to_rfc3339());
        let created: Option<Food> = self.base.db().create(FOOD_TABLE).content(food).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create food".to_string()))
    }

    async fn update(&self, id: &str, data: FoodUpdate) -> RepoResult<Food> {
        let record_id = parse_record_id(FOOD_TABLE, id)?;

        let existing: Option<Food> = self.base.db().select(record_id.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!("Food {}", id)));
        }

        let updated: Option<Food> = self.base.db().update(record_id).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Food {}", id)))
    }

    async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record_id = parse_record_id(FOOD_TABLE, id)?;
        let deleted: Option<Food> = self.base.db().delete(record_id).await?;
        Ok(deleted.is_some())
    }
}
