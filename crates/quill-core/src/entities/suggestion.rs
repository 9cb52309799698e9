use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;

/// One entry of a suggestion batch.
///
/// `index` is the entry's position within its batch and is the identity used
/// for selection, so two entries with the same title stay distinct.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuggestedSubtask {
    pub index: usize,
    pub title: String,
    /// `None` means the backend expressed no preference; `Medium` is used.
    pub priority: Option<Priority>,
}

impl SuggestedSubtask {
    #[must_use]
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }
}
