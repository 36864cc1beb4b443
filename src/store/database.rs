use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use super::{CategoryStore, StoreError};
use crate::models::{categories, prelude::Categories, Category, CategoryPage, CategoryPatch};

/// Categories persisted through sea-orm.
#[derive(Debug, Clone)]
pub struct DatabaseCategoryStore {
    db: DatabaseConnection,
}

impl DatabaseCategoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryStore for DatabaseCategoryStore {
    async fn insert(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<Category, StoreError> {
        let txn = self.db.begin().await?;

        // `seq` is unique, so a racing insert that read the same maximum fails.
        let seq = Categories::find()
            .order_by_desc(categories::Column::Seq)
            .one(&txn)
            .await?
            .map_or(1, |last| last.seq + 1);

        let now = chrono::Utc::now();
        let active_category = categories::ActiveModel {
            id: Set(Uuid::new_v4()),
            seq: Set(seq),
            name: Set(name),
            description: Set(description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let category = active_category.insert(&txn).await?;
        txn.commit().await?;

        Ok(category)
    }

    async fn page(&self, offset: u64, limit: u64) -> Result<CategoryPage, StoreError> {
        let txn = self.db.begin().await?;

        let total = Categories::find().count(&txn).await?;
        let categories = if offset >= total {
            vec![]
        } else {
            Categories::find()
                .order_by_asc(categories::Column::Seq)
                .offset(offset)
                .limit(limit)
                .all(&txn)
                .await?
        };

        txn.commit().await?;
        debug!("read {} of {} categories at offset {}", categories.len(), total, offset);

        Ok(CategoryPage { categories, total })
    }

    async fn get(&self, id: Uuid) -> Result<Option<Category>, StoreError> {
        Ok(Categories::find_by_id(id).one(&self.db).await?)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: CategoryPatch,
    ) -> Result<Option<Category>, StoreError> {
        let txn = self.db.begin().await?;

        let Some(category) = Categories::find_by_id(id).one(&txn).await? else {
            txn.commit().await?;
            return Ok(None);
        };

        if patch.is_empty() {
            txn.commit().await?;
            return Ok(Some(category));
        }

        let mut active_category: categories::ActiveModel = category.into();
        if let Some(Some(name)) = patch.name {
            active_category.name = Set(name);
        }
        if let Some(description) = patch.description {
            active_category.description = Set(description);
        }
        active_category.updated_at = Set(chrono::Utc::now());

        let updated = active_category.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Category>, StoreError> {
        let txn = self.db.begin().await?;

        let category = Categories::find_by_id(id).one(&txn).await?;
        if category.is_some() {
            Categories::delete_by_id(id).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(category)
    }
}
