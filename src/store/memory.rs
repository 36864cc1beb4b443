use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CategoryStore, StoreError};
use crate::models::{Category, CategoryPage, CategoryPatch};

/// Keeps categories in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryCategoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    categories: IndexMap<Uuid, Category>,
    last_seq: i64,
}

impl MemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.categories.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.categories.is_empty()
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn insert(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<Category, StoreError> {
        let mut inner = self.inner.write().await;

        let mut id = Uuid::new_v4();
        while inner.categories.contains_key(&id) {
            id = Uuid::new_v4();
        }
        inner.last_seq += 1;

        let now = chrono::Utc::now();
        let category = Category {
            id,
            seq: inner.last_seq,
            name,
            description,
            created_at: now,
            updated_at: now,
        };
        inner.categories.insert(id, category.clone());

        Ok(category)
    }

    async fn page(&self, offset: u64, limit: u64) -> Result<CategoryPage, StoreError> {
        let inner = self.inner.read().await;
        let categories = &inner.categories;
        let total = categories.len() as u64;

        let page = match usize::try_from(offset) {
            Ok(offset) => categories
                .values()
                .skip(offset)
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .cloned()
                .collect(),
            Err(_) => vec![],
        };

        Ok(CategoryPage {
            categories: page,
            total,
        })
    }

    async fn get(&self, id: Uuid) -> Result<Option<Category>, StoreError> {
        Ok(self.inner.read().await.categories.get(&id).cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        patch: CategoryPatch,
    ) -> Result<Option<Category>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(category) = inner.categories.get_mut(&id) else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(category.clone()));
        }

        if let Some(Some(name)) = patch.name {
            category.name = name;
        }
        if let Some(description) = patch.description {
            category.description = description;
        }
        category.updated_at = chrono::Utc::now();

        Ok(Some(category.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Category>, StoreError> {
        Ok(self.inner.write().await.categories.shift_remove(&id))
    }
}
