//! In-process store with the same semantics as the PostgreSQL one.

use crate::error::AppError;
use crate::model::{Tutorial, TutorialInput, MAX_TEXT_LEN};
use crate::store::TutorialStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Tutorial>,
    last_id: i64,
}

/// Rows keyed by id; ids come from a counter that never goes back, even after deletes.
#[derive(Default)]
pub struct MemoryTutorialStore {
    inner: RwLock<Inner>,
}

impl MemoryTutorialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mirrors the VARCHAR(255) column width.
fn check_width(input: &TutorialInput) -> Result<(), AppError> {
    for (column, value) in [("title", &input.title), ("description", &input.description)] {
        if let Some(v) = value {
            if v.chars().count() > MAX_TEXT_LEN {
                return Err(AppError::StoreFailure(format!(
                    "value too long for {} ({} > {})",
                    column,
                    v.chars().count(),
                    MAX_TEXT_LEN
                )));
            }
        }
    }
    Ok(())
}

#[async_trait]
impl TutorialStore for MemoryTutorialStore {
    async fn list_all(&self) -> Result<Vec<Tutorial>, AppError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn list_by_title_contains(&self, fragment: &str) -> Result<Vec<Tutorial>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .filter(|t| t.title.as_deref().unwrap_or("").contains(fragment))
            .cloned()
            .collect())
    }

    async fn list_by_published(&self, published: bool) -> Result<Vec<Tutorial>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .filter(|t| t.published == published)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Tutorial>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, input: TutorialInput) -> Result<Tutorial, AppError> {
        check_width(&input)?;
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let tutorial = Tutorial::from_input(inner.last_id, input);
        inner.rows.insert(tutorial.id, tutorial.clone());
        tracing::info!(id = tutorial.id, "tutorial created");
        Ok(tutorial)
    }

    async fn update_by_id(&self, id: i64, input: TutorialInput) -> Result<Tutorial, AppError> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("tutorial {}", id)))?;
        check_width(&input)?;
        *row = Tutorial::from_input(id, input);
        Ok(row.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        if self.inner.write().await.rows.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("tutorial {}", id)));
        }
        tracing::info!(id, "tutorial deleted");
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        let removed = inner.rows.len();
        inner.rows.clear();
        tracing::info!(removed, "all tutorials deleted");
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
