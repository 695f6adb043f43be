//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB tables.

pub mod food;
pub mod order;

pub use food::FoodRepository;
pub use order::OrderRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
#[allow(async_fn_in_trait)]
pub trait Repository<T, CreateDto, UpdateDto> {
    async fn find_all(&self) -> RepoResult<Vec<T>>;
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<T>>;
    async fn create(&self, data: CreateDto) -> RepoResult<T>;
    async fn update(&self, id: &str, data: UpdateDto) -> RepoResult<T>;
    async fn delete(&self, id: &str) -> RepoResult<bool>;
}

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================

/// Parse an id that may arrive as "table:key" or as a bare key.
///
/// Rejects ids addressing a different table.
pub fn parse_record_id(table: &str, raw: &str) -> RepoResult<RecordId> {
    if let Some((prefix, key)) = raw.split_once(':') {
        if prefix != table {
            return Err(RepoError::InvalidId(format!(
                "expected {table} id, got {raw}"
            )));
        }
        if key.is_empty() {
            return Err(RepoError::InvalidId(raw.to_string()));
        }
        Ok(RecordId::from_table_key(table, key))
    } else if raw.is_empty() {
        Err(RepoError::InvalidId("empty id".to_string()))
    } else {
        Ok(RecordId::from_table_key(table, raw))
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_and_bare_ids() {
        let a = parse_record_id("food", "food:abc").unwrap();
        let b = parse_record_id("food", "abc").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_wrong_table() {
        assert!(matches!(
            parse_record_id("food", "order:abc"),
            Err(RepoError::InvalidId(_))
        ));
    }

    #[test]
    fn rejects_empty() {
        assert!(parse_record_id("food", "").is_err());
        assert!(parse_record_id("food", "food:").is_err());
    }
}
