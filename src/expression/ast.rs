//! Expression structures

use super::registry::PlaceholderRegistry;

/// Comparison operators the builder emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Equality: attribute = value
    Eq,
    /// Strictly greater: attribute > value
    Gt,
    /// Strictly less: attribute < value
    Lt,
}

impl Comparator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Gt => ">",
            Comparator::Lt => "<",
        }
    }
}

/// One clause. Names and values are placeholder references into the
/// expression's registry, never raw attribute names or literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `#name <op> :value`
    Compare {
        name: String,
        op: Comparator,
        value: String,
    },
    /// List (or string) attribute contains the value
    Contains { name: String, value: String },
    /// Disjunction of the inner clauses
    AnyOf(Vec<Condition>),
}

impl Condition {
    pub fn compare(name: impl Into<String>, op: Comparator, value: impl Into<String>) -> Self {
        Condition::Compare {
            name: name.into(),
            op,
            value: value.into(),
        }
    }

    pub fn contains(name: impl Into<String>, value: impl Into<String>) -> Self {
        Condition::Contains {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Key clauses and filter clauses over one placeholder registry.
///
/// Key clauses are ANDed and evaluated by the access path; filter clauses are
/// ANDed and evaluated on each key-matching item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    pub key_conditions: Vec<Condition>,
    pub filter_conditions: Vec<Condition>,
    pub placeholders: PlaceholderRegistry,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_key_condition(&self) -> bool {
        !self.key_conditions.is_empty()
    }

    pub fn has_filter_condition(&self) -> bool {
        !self.filter_conditions.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_key_condition() && !self.has_filter_condition()
    }
}
