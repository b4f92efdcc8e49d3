//! Update descriptors computed when an issue moves between columns.

use super::IssueState;
use serde::{Deserialize, Serialize};

/// Field changes sent to the tracker in a single update call.
///
/// Absent fields are left untouched by the tracker and are omitted from the
/// serialized payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFieldUpdate {
    /// New open/closed state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    /// Full replacement assignee list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
}

impl IssueFieldUpdate {
    /// Returns whether the update carries no field changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.state.is_none() && self.assignees.is_none()
    }

    /// Combines two updates; fields set in `other` take precedence.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            state: other.state.or(self.state),
            assignees: other.assignees.or(self.assignees),
        }
    }
}

/// Label and state diff aligning an issue with a target column.
///
/// `labels_to_add` holds at most one label and never overlaps
/// `labels_to_remove`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateUpdate {
    /// Field changes for the combined update call.
    pub update: IssueFieldUpdate,
    /// Labels to add in one call.
    pub labels_to_add: Vec<String>,
    /// Labels to remove, one call each.
    pub labels_to_remove: Vec<String>,
}

impl StateUpdate {
    /// Returns whether applying the diff would change nothing.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.update.is_empty() && self.labels_to_add.is_empty() && self.labels_to_remove.is_empty()
    }
}
