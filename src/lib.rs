//! Tutorial API: CRUD REST service over a single PostgreSQL table.

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use app::build_app;
pub use config::{ServerConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::{Tutorial, TutorialInput, TutorialPayload};
pub use state::AppState;
pub use store::{ensure_database_exists, MemoryTutorialStore, PgTutorialStore, TutorialStore};
