//! The action record as stored in the table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of an action item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStatus {
    New,
    InProgress,
    Completed,
    Cancelled,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::New => "New",
            ActionStatus::InProgress => "InProgress",
            ActionStatus::Completed => "Completed",
            ActionStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One action item.
///
/// `actionboardID` plus `createdAt` position the record inside the
/// by-board secondary index; `id` is the primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: String,

    pub action: String,

    #[serde(rename = "actionboardID")]
    pub actionboard_id: String,

    #[serde(rename = "actionListStatus")]
    pub action_list_status: ActionStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: String,

    #[serde(rename = "updatedAt")]
    pub updated_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegate: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore: Option<bool>,

    #[serde(rename = "isImportant", default, skip_serializing_if = "Option::is_none")]
    pub is_important: Option<bool>,

    #[serde(rename = "isUrgent", default, skip_serializing_if = "Option::is_none")]
    pub is_urgent: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(rename = "__typename", default, skip_serializing_if = "Option::is_none")]
    pub typename: Option<String>,
}

impl ActionRecord {
    /// Create a record with the required attributes; optional ones start empty.
    pub fn new(
        id: impl Into<String>,
        action: impl Into<String>,
        actionboard_id: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        let created_at = created_at.into();
        Self {
            id: id.into(),
            action: action.into(),
            actionboard_id: actionboard_id.into(),
            action_list_status: ActionStatus::New,
            context: None,
            updated_at: created_at.clone(),
            created_at,
            delegate: None,
            ignore: None,
            is_important: None,
            is_urgent: None,
            tags: None,
            typename: None,
        }
    }

    pub fn with_status(mut self, status: ActionStatus) -> Self {
        self.action_list_status = status;
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn important(mut self, flag: bool) -> Self {
        self.is_important = Some(flag);
        self
    }

    pub fn urgent(mut self, flag: bool) -> Self {
        self.is_urgent = Some(flag);
        self
    }

    pub fn with_updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = updated_at.into();
        self
    }
}
