//! Tutorial record and the parsed create/update input.

use serde::{Deserialize, Serialize};

/// Column width of `title` and `description` in the tutorials table.
pub const MAX_TEXT_LEN: usize = 255;

/// A persisted tutorial. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tutorial {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub published: bool,
}

impl Tutorial {
    pub fn from_input(id: i64, input: TutorialInput) -> Self {
        Tutorial {
            id,
            title: input.title,
            description: input.description,
            published: input.published,
        }
    }
}

/// Request body of create and update as it arrives on the wire.
/// Every field is optional; unknown fields (including `id`) are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct TutorialPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub published: Option<bool>,
}

/// Fields written by create and update, with defaults already applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorialInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub published: bool,
}

impl From<TutorialPayload> for TutorialInput {
    /// Missing or null `published` becomes `false`; text fields stay absent.
    fn from(payload: TutorialPayload) -> Self {
        TutorialInput {
            title: payload.title,
            description: payload.description,
            published: payload.published.unwrap_or(false),
        }
    }
}
