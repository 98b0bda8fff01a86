use crate::{
    PREFIX_SENTINEL,
    query::{
        constraint::{Constraint, ConstraintSet},
        order::OrderClause,
        predicate::{CompareOp, FilterClause},
    },
    value::Value,
};

///
/// FieldRef
///
/// Borrowed field name with method-based clause builders.
/// Screens choose search fields at runtime, so this wraps any `&str`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FieldRef<'a>(&'a str);

impl<'a> FieldRef<'a> {
    #[must_use]
    pub const fn new(name: &'a str) -> Self {
        Self(name)
    }

    #[must_use]
    pub const fn as_str(self) -> &'a str {
        self.0
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    #[must_use]
    pub fn eq(self, value: impl Into<Value>) -> FilterClause {
        FilterClause::new(self.0, CompareOp::Eq, value.into())
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Value>) -> FilterClause {
        FilterClause::new(self.0, CompareOp::Lt, value.into())
    }

    #[must_use]
    pub fn lte(self, value: impl Into<Value>) -> FilterClause {
        FilterClause::new(self.0, CompareOp::Lte, value.into())
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Value>) -> FilterClause {
        FilterClause::new(self.0, CompareOp::Gt, value.into())
    }

    #[must_use]
    pub fn gte(self, value: impl Into<Value>) -> FilterClause {
        FilterClause::new(self.0, CompareOp::Gte, value.into())
    }

    /// Set-membership filter.
    #[must_use]
    pub fn in_list<I, V>(self, values: I) -> FilterClause
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        FilterClause::new(
            self.0,
            CompareOp::In,
            Value::List(values.into_iter().map(Into::into).collect()),
        )
    }

    /// "Starts with" as a closed text range: `field >= prefix AND
    /// field <= prefix + U+F8FF`. Returns the two filters in that order.
    #[must_use]
    pub fn starts_with(self, prefix: &str) -> [FilterClause; 2] {
        [
            self.gte(prefix),
            self.lte(format!("{prefix}{PREFIX_SENTINEL}")),
        ]
    }

    /// Prefix filters followed by the ascending order clause the store
    /// requires for them.
    #[must_use]
    pub fn prefix_search(self, prefix: &str) -> ConstraintSet {
        let [low, high] = self.starts_with(prefix);

        [
            Constraint::Filter(low),
            Constraint::Filter(high),
            Constraint::Order(self.asc()),
        ]
        .into_iter()
        .collect()
    }

    // ------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------

    #[must_use]
    pub fn asc(self) -> OrderClause {
        OrderClause::asc(self.0)
    }

    #[must_use]
    pub fn desc(self) -> OrderClause {
        OrderClause::desc(self.0)
    }
}
