//! Database Module
//!
//! Embedded SurrealDB storage. The on-disk engine (RocksDB) backs the real
//! server; the in-memory engine backs tests.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::core::ServerError;

const NAMESPACE: &str = "restaurant";
const DATABASE: &str = "admin";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk database at the given path
    pub async fn open(db_path: &str) -> Result<Self, ServerError> {
        let db = Surreal::new::<RocksDb>(db_path).await?;
        db.use_ns(NAMESPACE).use_db(DATABASE).await?;

        tracing::info!(path = %db_path, "Database connection established (SurrealDB/RocksDB)");

        Ok(Self { db })
    }

    /// Open an in-memory database (tests)
    pub async fn open_in_memory() -> Result<Self, ServerError> {
        let db = Surreal::new::<Mem>(()).await?;
        db.use_ns(NAMESPACE).use_db(DATABASE).await?;
        Ok(Self { db })
    }
}
