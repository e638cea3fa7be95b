//! Request extractors that reject with [`crate::error::AppError`].

pub mod body;
pub mod id;

pub use body::TutorialBody;
pub use id::TutorialId;
