//! Route tables.

pub mod common;
pub mod tutorial;

pub use common::common_routes;
pub use tutorial::tutorial_routes;
