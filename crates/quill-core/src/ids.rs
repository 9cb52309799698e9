//! ID prefix constants for store-assigned identifiers.
//!
//! IDs have the shape `{prefix}-{8 hex chars}`, e.g. `tsk-a3f8b2c1`.

pub const PREFIX_TASK: &str = "tsk";

/// Check whether `id` looks like an ID carrying `prefix`.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| hex.len() == 8 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
