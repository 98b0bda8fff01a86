//! Module: query
//! Responsibility: constraint-set vocabulary, fluent builders, and in-memory filter evaluation.
//! Does not own: choosing which constraints a screen needs (see `search`).
//! Boundary: everything a store adapter receives is expressed here.

mod constraint;
mod eval;
mod field;
mod order;
mod predicate;


pub use constraint::{Constraint, ConstraintSet};
pub use eval::{eval_filter, matches};
pub use field::FieldRef;
pub use order::{OrderClause, OrderDirection};
pub use predicate::{CompareOp, FilterClause};
