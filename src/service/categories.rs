use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    models::{Category, CategoryPage, CategoryPatch, NewCategory},
    store::{CategoryStore, StoreError},
};

#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validates category requests and hands them to a [`CategoryStore`].
///
/// A missing id is reported as `Ok(None)` by every by-id operation, never as
/// an error, so callers can tell "not found" apart from bad input and from
/// store failures.
#[derive(Clone)]
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// Fetch the 1-indexed `page` of at most `limit` categories, in creation order.
    ///
    /// Asking for a page past the end is not an error, the result is simply empty.
    pub async fn get_all_categories(
        &self,
        page: i64,
        limit: i64,
    ) -> Result<CategoryPage, CategoryError> {
        debug!("get_all_categories: page {}, limit {}", page, limit);

        if page <= 0 {
            return Err(CategoryError::InvalidArgument(format!(
                "page must be a positive integer, got {}.",
                page
            )));
        }
        if limit <= 0 {
            return Err(CategoryError::InvalidArgument(format!(
                "limit must be a positive integer, got {}.",
                limit
            )));
        }

        // Both are positive here, so the casts are lossless.
        let limit = limit as u64;
        let offset = (page as u64 - 1).checked_mul(limit).unwrap_or(u64::MAX);

        Ok(self.store.page(offset, limit).await?)
    }

    pub async fn get_category(&self, id: Uuid) -> Result<Option<Category>, CategoryError> {
        debug!("get_category: {}", id);
        Ok(self.store.get(id).await?)
    }

    pub async fn create_category(&self, draft: NewCategory) -> Result<Category, CategoryError> {
        let name = match draft.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                warn!("create_category rejected: empty name");
                return Err(CategoryError::Validation(String::from(
                    "Category name cannot be empty.",
                )));
            }
        };

        let category = self.store.insert(name, draft.description).await?;
        info!("created category {} ({})", category.id, category.name);

        Ok(category)
    }

    /// Overwrite the fields present in `patch`. Returns `Ok(None)` if `id` is unknown.
    pub async fn update_category(
        &self,
        id: Uuid,
        mut patch: CategoryPatch,
    ) -> Result<Option<Category>, CategoryError> {
        if let Some(name) = patch.name.take() {
            let name = name.as_deref().map(str::trim).unwrap_or_default();
            if name.is_empty() {
                warn!("update_category {} rejected: empty name", id);
                return Err(CategoryError::Validation(String::from(
                    "Category name cannot be empty.",
                )));
            }
            patch.name = Some(Some(name.to_string()));
        }

        let updated = self.store.update(id, patch).await?;
        match &updated {
            Some(category) => info!("updated category {} ({})", id, category.name),
            None => debug!("update_category: {} not found", id),
        }

        Ok(updated)
    }

    /// Remove a category for good. Returns `Ok(None)` if `id` is unknown.
    pub async fn delete_category(&self, id: Uuid) -> Result<Option<Category>, CategoryError> {
        let deleted = self.store.delete(id).await?;
        match &deleted {
            Some(category) => info!("deleted category {} ({})", id, category.name),
            None => debug!("delete_category: {} not found", id),
        }

        Ok(deleted)
    }
}
