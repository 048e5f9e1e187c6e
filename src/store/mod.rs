//! Sorted key-value store contract
//!
//! The planner talks to storage through `ActionStore`: one call takes a
//! complete `StoreQuery` (expression, page size, index, start key, scan
//! direction) and returns one page of items plus the key to resume after.
//!
//! # Access paths
//!
//! - By-board index: partition `actionboardID`, sort `createdAt`
//! - Primary table: partition `id`; a query with no key clause lists the
//!   whole table in primary-key order
//!
//! `MemoryStore` implements the contract in process.

mod errors;
mod eval;
mod memory;
mod query;

pub use errors::{StoreError, StoreResult};
pub use memory::{MemoryStore, DEFAULT_BOARD_INDEX, DEFAULT_TABLE_NAME};
pub use query::{ContinuationKey, RenderedQuery, StoreOutput, StoreQuery};

/// A store that can answer one paginated query per call
pub trait ActionStore: Send + Sync {
    fn query(&self, query: &StoreQuery) -> StoreResult<StoreOutput>;
}
