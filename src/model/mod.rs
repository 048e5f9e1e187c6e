//! Value types shared by every layer.
//!
//! Wire names follow the GraphQL schema the list resolver serves, so the
//! serde renames here are the public contract.

mod action;
mod input;
mod output;

pub use action::{ActionRecord, ActionStatus};
pub use input::{
    EventArguments, EventInfo, ListActionsEvent, ListActionsInput, ListFilter, PageSpec,
    SortDirection, SortField, SortSpec,
};
pub use output::{ListActionsResponse, ResultPage};

/// Stored attribute names referenced by expressions and key schemas
pub mod attributes {
    pub const ID: &str = "id";
    pub const BOARD_ID: &str = "actionboardID";
    pub const STATUS: &str = "actionListStatus";
    pub const IS_IMPORTANT: &str = "isImportant";
    pub const IS_URGENT: &str = "isUrgent";
    pub const CREATED_AT: &str = "createdAt";
    pub const TAGS: &str = "tags";
}
