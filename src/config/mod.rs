//! Server configuration: types and environment loading.

pub mod types;
pub mod loader;

pub use types::*;
