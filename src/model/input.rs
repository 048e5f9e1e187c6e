//! Inbound request structures.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use super::action::ActionStatus;

/// Structured filter over action records.
///
/// All fields are optional. Tags use OR semantics; the created bounds are
/// exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFilter {
    #[serde(rename = "searchTerm", default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,

    #[serde(rename = "actionboardID", default, skip_serializing_if = "Option::is_none")]
    pub actionboard_id: Option<String>,

    #[serde(rename = "actionListStatus", default, skip_serializing_if = "Option::is_none")]
    pub action_list_status: Option<ActionStatus>,

    #[serde(rename = "isImportant", default, skip_serializing_if = "Option::is_none")]
    pub is_important: Option<bool>,

    #[serde(rename = "isUrgent", default, skip_serializing_if = "Option::is_none")]
    pub is_urgent: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(rename = "createdAfter", default, skip_serializing_if = "Option::is_none")]
    pub created_after: Option<String>,

    #[serde(rename = "createdBefore", default, skip_serializing_if = "Option::is_none")]
    pub created_before: Option<String>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(mut self, board_id: impl Into<String>) -> Self {
        self.actionboard_id = Some(board_id.into());
        self
    }

    pub fn status(mut self, status: ActionStatus) -> Self {
        self.action_list_status = Some(status);
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

    pub fn tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn created_after(mut self, bound: impl Into<String>) -> Self {
        self.created_after = Some(bound.into());
        self
    }

    pub fn created_before(mut self, bound: impl Into<String>) -> Self {
        self.created_before = Some(bound.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Board id, treating an empty string as absent.
    pub fn board_id(&self) -> Option<&str> {
        non_empty(&self.actionboard_id)
    }

    pub fn created_after_bound(&self) -> Option<&str> {
        non_empty(&self.created_after)
    }

    pub fn created_before_bound(&self) -> Option<&str> {
        non_empty(&self.created_before)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Sortable attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "updatedAt")]
    UpdatedAt,
    #[serde(rename = "action")]
    Action,
    #[serde(rename = "actionListStatus")]
    ActionListStatus,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
            SortField::Action => "action",
            SortField::ActionListStatus => "actionListStatus",
        }
    }
}

/// Sort direction. DESC is the system-wide default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[default]
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Whether the store should walk the sort key forward
    pub fn is_forward(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

impl SortSpec {
    pub fn new(field: SortField) -> Self {
        Self {
            field,
            direction: None,
        }
    }

    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: Some(SortDirection::Asc),
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: Some(SortDirection::Desc),
        }
    }
}

/// Page size and continuation token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    /// Requested page size; clamped by the planner, never rejected
    #[serde(
        default,
        deserialize_with = "saturating_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<i64>,

    #[serde(rename = "nextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl PageSpec {
    pub fn limit(limit: i64) -> Self {
        Self {
            limit: Some(limit),
            next_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

/// Complete list request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListActionsInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ListFilter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageSpec>,
}

impl ListActionsInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: ListFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_pagination(mut self, pagination: PageSpec) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Search term, if one survives trimming
    pub fn search_term(&self) -> Option<&str> {
        self.filter
            .as_ref()
            .and_then(|f| f.search_term.as_deref())
            .filter(|t| !t.trim().is_empty())
    }

    pub fn next_token(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.next_token.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// Resolver event envelope: `{ "arguments": { "input": ... }, "info": ... }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListActionsEvent {
    pub arguments: EventArguments,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<EventInfo>,
}

impl ListActionsEvent {
    pub fn new(input: ListActionsInput) -> Self {
        Self {
            arguments: EventArguments { input },
            info: None,
        }
    }
}

/// Reads any JSON number as a limit, saturating at the `i64` range
fn saturating_limit<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<Number>::deserialize(deserializer)?;
    Ok(number.map(|n| {
        n.as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .unwrap_or_else(|| n.as_f64().map_or(i64::MAX, |f| f as i64))
    }))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventArguments {
    #[serde(default)]
    pub input: ListActionsInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInfo {
    #[serde(rename = "fieldName")]
    pub field_name: String,
}
