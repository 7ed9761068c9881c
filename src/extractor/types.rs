use serde::{Deserialize, Serialize};

/// A single extracted action item.
///
/// Invariant: `task` is non-empty after trimming. `due_date` is either empty
/// or a calendar date formatted as `YYYY-MM-DD`; no other format is emitted.
/// Items carry no identity of their own — persistence and done/owner edits
/// belong to the consuming application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub owner: String, // May be empty when no speaker/assignee is known
    pub due_date: String,
}
