//! In-memory ordered store
//!
//! Keeps the primary table ordered by `id` and the by-board index ordered by
//! `(actionboardID, createdAt, id)`. Query semantics:
//!
//! - Key clauses pick the access path; only partition-key equality is allowed
//! - Filter clauses are evaluated on each key-matching item before it counts
//!   toward `limit`
//! - The page stops at `limit` matches; `last_evaluated_key` is set only when
//!   key-matching items remain after the last one returned

use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::eval;
use super::query::{ContinuationKey, StoreOutput, StoreQuery};
use super::ActionStore;
use crate::expression::{Comparator, Condition, Expression};
use crate::model::{attributes, ActionRecord};

/// Default table name used by `MemoryStore::default`
pub const DEFAULT_TABLE_NAME: &str = "ActionList";

/// Default by-board index name
pub const DEFAULT_BOARD_INDEX: &str = "byActionBoard";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct BoardKey {
    board: String,
    created_at: String,
    id: String,
}

impl BoardKey {
    fn of(record: &ActionRecord) -> Self {
        Self {
            board: record.actionboard_id.clone(),
            created_at: record.created_at.clone(),
            id: record.id.clone(),
        }
    }

    /// Smallest key in a partition
    fn partition_start(board: &str) -> Self {
        Self {
            board: board.to_string(),
            created_at: String::new(),
            id: String::new(),
        }
    }
}

#[derive(Debug)]
struct StoredItem {
    record: ActionRecord,
    document: Value,
}

#[derive(Debug, Default)]
struct Tables {
    primary: BTreeMap<String, StoredItem>,
    by_board: BTreeSet<BoardKey>,
}

/// How a query reaches its items
#[derive(Debug, Clone, PartialEq, Eq)]
enum AccessPath {
    /// One partition of the by-board index
    Board(String),
    /// Whole primary table in key order
    Table,
}

/// Position within an access path: (sort value, id)
type ScanPosition = (String, String);

/// Ordered in-memory implementation of `ActionStore`
#[derive(Debug)]
pub struct MemoryStore {
    table_name: String,
    board_index: String,
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new(table_name: impl Into<String>, board_index: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            board_index: board_index.into(),
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Creates a store preloaded with `records`
    pub fn with_records(
        table_name: impl Into<String>,
        board_index: impl Into<String>,
        records: impl IntoIterator<Item = ActionRecord>,
    ) -> StoreResult<Self> {
        let store = Self::new(table_name, board_index);
        for record in records {
            store.put(record)?;
        }
        Ok(store)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn board_index(&self) -> &str {
        &self.board_index
    }

    /// Inserts or replaces a record by id
    pub fn put(&self, record: ActionRecord) -> StoreResult<()> {
        let document = serde_json::to_value(&record)
            .map_err(|e| StoreError::invalid(format!("Unserializable item: {}", e)))?;

        let mut tables = self.write()?;
        if let Some(previous) = tables.primary.get(&record.id) {
            let stale = BoardKey::of(&previous.record);
            tables.by_board.remove(&stale);
        }
        tables.by_board.insert(BoardKey::of(&record));
        tables
            .primary
            .insert(record.id.clone(), StoredItem { record, document });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read().map(|t| t.primary.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    /// Resolves index name and key clauses to an access path
    fn access_path(&self, query: &StoreQuery) -> StoreResult<AccessPath> {
        let expr = &query.expression;
        match &query.index_name {
            Some(index) if index != &self.board_index => Err(StoreError::invalid(format!(
                "The table does not have the specified index: {}",
                index
            ))),
            Some(_) => partition_value(expr, attributes::BOARD_ID)?
                .map(AccessPath::Board)
                .ok_or_else(|| missing_key_element(attributes::BOARD_ID)),
            None if !expr.has_key_condition() => Ok(AccessPath::Table),
            None => Err(StoreError::invalid(
                "Query key condition not supported on the primary table",
            )),
        }
    }

    /// Parses an exclusive start key for the given access path
    fn start_position(path: &AccessPath, key: &ContinuationKey) -> StoreResult<ScanPosition> {
        match path {
            AccessPath::Board(board) => {
                let key_board = key_string(key, attributes::BOARD_ID)?;
                if key_board != board {
                    return Err(StoreError::invalid(
                        "The provided starting key does not match the key condition",
                    ));
                }
                Ok((
                    key_string(key, attributes::CREATED_AT)?.to_string(),
                    key_string(key, attributes::ID)?.to_string(),
                ))
            }
            AccessPath::Table => {
                let id = key_string(key, attributes::ID)?.to_string();
                Ok((id.clone(), id))
            }
        }
    }

    fn continuation_key(path: &AccessPath, record: &ActionRecord) -> ContinuationKey {
        let mut key = ContinuationKey::new();
        key.insert(attributes::ID.to_string(), Value::from(record.id.as_str()));
        if let AccessPath::Board(_) = path {
            key.insert(
                attributes::BOARD_ID.to_string(),
                Value::from(record.actionboard_id.as_str()),
            );
            key.insert(
                attributes::CREATED_AT.to_string(),
                Value::from(record.created_at.as_str()),
            );
        }
        key
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_NAME, DEFAULT_BOARD_INDEX)
    }
}

impl Tables {
    /// Items on the access path in ascending scan order
    fn candidates(&self, path: &AccessPath) -> Vec<(ScanPosition, &StoredItem)> {
        match path {
            AccessPath::Board(board) => self
                .by_board
                .range(BoardKey::partition_start(board)..)
                .take_while(|k| &k.board == board)
                .filter_map(|k| {
                    self.primary
                        .get(&k.id)
                        .map(|item| ((k.created_at.clone(), k.id.clone()), item))
                })
                .collect(),
            AccessPath::Table => self
                .primary
                .iter()
                .map(|(id, item)| ((id.clone(), id.clone()), item))
                .collect(),
        }
    }
}

impl ActionStore for MemoryStore {
    fn query(&self, query: &StoreQuery) -> StoreResult<StoreOutput> {
        if query.table_name != self.table_name {
            return Err(StoreError::ResourceNotFound(format!(
                "table {}",
                query.table_name
            )));
        }
        if query.limit == 0 {
            return Err(StoreError::invalid("Limit must be greater than or equal to 1"));
        }

        let path = self.access_path(query)?;
        let start = query
            .exclusive_start_key
            .as_ref()
            .map(|key| Self::start_position(&path, key))
            .transpose()?;

        let tables = self.read()?;
        let mut candidates = tables.candidates(&path);
        if !query.scan_index_forward {
            candidates.reverse();
        }
        if let Some(start) = &start {
            candidates.retain(|(pos, _)| {
                if query.scan_index_forward {
                    pos > start
                } else {
                    pos < start
                }
            });
        }

        let limit = query.limit as usize;
        let expr = &query.expression;
        let mut output = StoreOutput::default();

        for (i, (_, item)) in candidates.iter().enumerate() {
            if !eval::matches_all(&expr.filter_conditions, &expr.placeholders, &item.document)? {
                continue;
            }
            output.items.push(item.record.clone());
            if output.items.len() == limit {
                if i + 1 < candidates.len() {
                    output.last_evaluated_key = Some(Self::continuation_key(&path, &item.record));
                }
                break;
            }
        }

        Ok(output)
    }
}

/// Extracts the value of a single `#attr = :value` key clause on `attribute`.
///
/// Returns `None` when no key clause targets the attribute; any other key
/// clause shape is rejected.
fn partition_value(expr: &Expression, attribute: &str) -> StoreResult<Option<String>> {
    let mut found = None;
    for condition in &expr.key_conditions {
        let Condition::Compare {
            name,
            op: Comparator::Eq,
            value,
        } = condition
        else {
            return Err(StoreError::invalid("Query key condition not supported"));
        };
        if expr.placeholders.resolve_name(name) != Some(attribute) || found.is_some() {
            return Err(StoreError::invalid("Query key condition not supported"));
        }
        match eval::resolve_value(&expr.placeholders, value)? {
            Value::String(s) => found = Some(s.clone()),
            _ => {
                return Err(StoreError::invalid(
                    "Condition parameter type does not match schema type",
                ))
            }
        }
    }
    Ok(found)
}

fn missing_key_element(attribute: &str) -> StoreError {
    StoreError::invalid(format!(
        "Query condition missed key schema element: {}",
        attribute
    ))
}

fn key_string<'a>(key: &'a ContinuationKey, attribute: &str) -> StoreResult<&'a str> {
    key.get(attribute).and_then(Value::as_str).ok_or_else(|| {
        StoreError::invalid(format!(
            "The provided starting key is invalid: missing key attribute {}",
            attribute
        ))
    })
}
