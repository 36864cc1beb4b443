//! Persistence of categories.
//!
//! [`CategoryStore`] is the seam between the category service and whatever
//! holds the canonical records. Lookups by id return `Ok(None)` when the id
//! does not resolve; `Err` is reserved for the store itself failing.

mod database;
mod memory;

pub use database::DatabaseCategoryStore;
pub use memory::MemoryCategoryStore;

use async_trait::async_trait;
use sea_orm::DbErr;
use uuid::Uuid;

use crate::models::{Category, CategoryPage, CategoryPatch};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(sea_orm::DbErr),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<DbErr> for StoreError {
    fn from(e: DbErr) -> Self {
        match e {
            DbErr::ConnectionAcquire(e) => Self::Unavailable(e.to_string()),
            DbErr::Conn(e) => Self::Unavailable(e.to_string()),
            e => Self::Database(e),
        }
    }
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Insert a new category under a freshly generated id.
    async fn insert(&self, name: String, description: Option<String>)
        -> Result<Category, StoreError>;

    /// Up to `limit` categories starting at `offset`, ordered by `seq`,
    /// along with the total number of categories.
    async fn page(&self, offset: u64, limit: u64) -> Result<CategoryPage, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<Category>, StoreError>;

    /// Apply the fields present in `patch`. The id never changes.
    ///
    /// A `name` of `Some(None)` is ignored; callers validate names first.
    async fn update(&self, id: Uuid, patch: CategoryPatch)
        -> Result<Option<Category>, StoreError>;

    /// Remove a category, handing back its last state.
    async fn delete(&self, id: Uuid) -> Result<Option<Category>, StoreError>;
}
