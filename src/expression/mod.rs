//! Filter-to-expression translation
//!
//! A `ListFilter` becomes a store-neutral `Expression`: an explicit list of
//! key clauses and filter clauses whose attribute names and values live in a
//! `PlaceholderRegistry`. Rendering to the key-value store's condition syntax
//! is a separate step, so the rule logic in `ExpressionBuilder` does not
//! depend on one store's query language.
//!
//! # Rules (in precedence order)
//!
//! 1. A board id produces the only key clause and selects the by-board index
//! 2. Status, flags and created bounds each add one ANDed filter clause
//! 3. Tags add one OR group of `contains` clauses, ANDed with the rest
//! 4. Every attribute name is referenced through a placeholder registered once
//! 5. No filter produces an empty expression and no index

mod ast;
mod builder;
mod registry;
mod render;

pub use ast::{Comparator, Condition, Expression};
pub use builder::{BuiltExpression, ExpressionBuilder};
pub use registry::PlaceholderRegistry;
pub use render::RenderedExpression;
