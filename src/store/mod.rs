//! Record Store: persistence gateway for tutorial rows.

mod memory;
mod postgres;

pub use memory::MemoryTutorialStore;
pub use postgres::{ensure_database_exists, PgTutorialStore};

use crate::error::AppError;
use crate::model::{Tutorial, TutorialInput};
use async_trait::async_trait;

/// Typed operations over the tutorials table. Lists are ordered by id.
#[async_trait]
pub trait TutorialStore: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Tutorial>, AppError>;

    /// Case-sensitive substring match on title. The empty fragment matches every record.
    async fn list_by_title_contains(&self, fragment: &str) -> Result<Vec<Tutorial>, AppError>;

    async fn list_by_published(&self, published: bool) -> Result<Vec<Tutorial>, AppError>;

    /// `None` when no record has `id`.
    async fn get_by_id(&self, id: i64) -> Result<Option<Tutorial>, AppError>;

    /// Persist a new record and return it with its assigned id.
    async fn create(&self, input: TutorialInput) -> Result<Tutorial, AppError>;

    /// Overwrite title, description and published. `NotFound` when `id` is absent.
    async fn update_by_id(&self, id: i64, input: TutorialInput) -> Result<Tutorial, AppError>;

    /// `NotFound` when `id` is absent.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Remove every record; succeeds on an empty store.
    async fn delete_all(&self) -> Result<(), AppError>;

    /// Cheap liveness check of the backing store.
    async fn ping(&self) -> Result<(), AppError>;
}
