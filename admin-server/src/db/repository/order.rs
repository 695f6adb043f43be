//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, Repository, parse_record_id};
use crate::db::models::{Order, OrderCreate, OrderUpdate};
use shared::OrderStatus;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const ORDER_TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

impl Repository<Order, OrderCreate, OrderUpdate> for OrderRepository {
    /// Find all orders, newest first
    async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let mut orders: Vec<Order> = self.base.db().select(ORDER_TABLE).await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let record_id = parse_record_id(ORDER_TABLE, id)?;
        let order: Option<Order> = self.base.db().select(record_id).await?;
        Ok(order)
    }

    async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let order = Order {
            id: None,
            table_number: data.table_number,
            items: data.items,
            status: data.status.unwrap_or(OrderStatus::Pending),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        };

        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    async fn update(&self, id: &str, data: OrderUpdate) -> RepoResult<Order> {
        let record_id = parse_record_id(ORDER_TABLE, id)?;

        let existing: Option<Order> = self.base.db().select(record_id.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!("Order {}", id)));
        }

        let updated: Option<Order> = self.base.db().update(record_id).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Order {}", id)))
    }

    async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record_id = parse_record_id(ORDER_TABLE, id)?;
        let deleted: Option<Order> = self.base.db().delete(record_id).await?;
        Ok(deleted.is_some())
    }
}
