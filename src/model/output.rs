//! Outbound response structures.

use serde::{Deserialize, Serialize};

use super::action::ActionRecord;

/// One page of results.
///
/// `total_count` is the size of this page after search refinement, never a
/// global count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    pub items: Vec<ActionRecord>,

    #[serde(rename = "nextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(rename = "totalCount")]
    pub total_count: usize,
}

impl ResultPage {
    pub fn new(items: Vec<ActionRecord>, next_token: Option<String>) -> Self {
        let total_count = items.len();
        Self {
            items,
            next_token,
            total_count,
        }
    }
}

/// Uniform response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListActionsResponse {
    pub success: bool,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResultPage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListActionsResponse {
    pub const SUCCESS_MESSAGE: &'static str = "Actions retrieved successfully";
    pub const FAILURE_MESSAGE: &'static str = "Failed to list actions";

    pub fn success(page: ResultPage) -> Self {
        Self {
            success: true,
            message: Self::SUCCESS_MESSAGE.to_string(),
            data: Some(page),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Self::FAILURE_MESSAGE.to_string(),
            data: None,
            error: Some(error.into()),
        }
    }
}
