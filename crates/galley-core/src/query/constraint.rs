use crate::{
    CREATED_AT, ID_FIELD,
    error::QueryError,
    query::{
        order::{OrderClause, OrderDirection},
        predicate::{CompareOp, FilterClause},
    },
    value::Value,
};
use std::collections::BTreeSet;

///
/// Constraint
///
/// One clause of a query, kept in declaration order.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Constraint {
    Filter(FilterClause),
    Order(OrderClause),
}

///
/// ConstraintSet
///
/// Ordered clause list handed to the store adapter.
///
/// Filters combine conjunctively. Order clauses form a compound sort key in
/// declaration order; with none declared, `createdAt desc` applies. The
/// store always breaks remaining ties on the document id.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstraintSet {
    clauses: Vec<Constraint>,
}

impl ConstraintSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    #[must_use]
    pub fn default_order() -> OrderClause {
        OrderClause::desc(CREATED_AT)
    }

    #[must_use]
    pub fn filter(mut self, clause: FilterClause) -> Self {
        self.clauses.push(Constraint::Filter(clause));
        self
    }

    #[must_use]
    pub fn order(mut self, clause: OrderClause) -> Self {
        self.clauses.push(Constraint::Order(clause));
        self
    }

    /// Append every clause of `other`, preserving its order.
    #[must_use]
    pub fn and(mut self, other: Self) -> Self {
        self.clauses.extend(other.clauses);
        self
    }

    pub fn push(&mut self, constraint: Constraint) {
        self.clauses.push(constraint);
    }

    #[must_use]
    pub fn clauses(&self) -> &[Constraint] {
        &self.clauses
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn filters(&self) -> impl Iterator<Item = &FilterClause> {
        self.clauses.iter().filter_map(|c| match c {
            Constraint::Filter(f) => Some(f),
            Constraint::Order(_) => None,
        })
    }

    pub fn order_clauses(&self) -> impl Iterator<Item = &OrderClause> {
        self.clauses.iter().filter_map(|c| match c {
            Constraint::Order(o) => Some(o),
            Constraint::Filter(_) => None,
        })
    }

    #[must_use]
    pub fn has_order(&self) -> bool {
        self.order_clauses().next().is_some()
    }

    /// Declared order clauses, or the default sort when none are declared.
    #[must_use]
    pub fn ordering(&self) -> Vec<OrderClause> {
        let declared: Vec<_> = self.order_clauses().cloned().collect();
        if declared.is_empty() {
            vec![Self::default_order()]
        } else {
            declared
        }
    }

    /// Ordering plus the id tiebreak, which follows the last clause's direction.
    #[must_use]
    pub fn effective_ordering(&self) -> Vec<OrderClause> {
        let mut ordering = self.ordering();
        if ordering.iter().all(|o| o.field != ID_FIELD) {
            let direction = ordering
                .last()
                .map_or(OrderDirection::Asc, |o| o.direction);
            ordering.push(OrderClause::new(ID_FIELD, direction));
        }

        ordering
    }

    /// Same filters with every sort direction flipped.
    ///
    /// If no order was declared the reversed default is made explicit, so
    /// the result never silently falls back to `createdAt desc`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut clauses: Vec<Constraint> = self
            .clauses
            .iter()
            .map(|c| match c {
                Constraint::Filter(f) => Constraint::Filter(f.clone()),
                Constraint::Order(o) => Constraint::Order(o.reversed()),
            })
            .collect();
        if !self.has_order() {
            clauses.push(Constraint::Order(Self::default_order().reversed()));
        }

        Self { clauses }
    }

    /// Enforce the store's index rules before a query leaves the process.
    ///
    /// - `In` lists are non-empty and at most `in_limit` long.
    /// - Every inequality-filtered field carries an order clause.
    /// - Inequality-ordered fields lead the sort: no order clause on a free
    ///   field (neither inequality- nor equality-filtered) may precede them.
    pub fn validate(&self, in_limit: usize) -> Result<(), QueryError> {
        let mut inequality = BTreeSet::new();
        let mut equality = BTreeSet::new();

        for filter in self.filters() {
            if filter.op == CompareOp::In {
                let Value::List(values) = &filter.value else {
                    return Err(QueryError::index_constraint(format!(
                        "'in' filter on '{}' requires a list value",
                        filter.field
                    )));
                };
                if values.is_empty() {
                    return Err(QueryError::EmptyInList {
                        field: filter.field.clone(),
                    });
                }
                if values.len() > in_limit {
                    return Err(QueryError::too_many_matches(
                        &filter.field,
                        values.len(),
                        in_limit,
                    ));
                }
            }

            if filter.op.is_inequality() {
                inequality.insert(filter.field.as_str());
            } else if filter.op.is_equality() {
                equality.insert(filter.field.as_str());
            }
        }

        if inequality.is_empty() {
            return Ok(());
        }

        let declared: Vec<&OrderClause> = self.order_clauses().collect();
        for field in &inequality {
            if !declared.iter().any(|o| o.field == *field) {
                return Err(QueryError::index_constraint(format!(
                    "inequality filter on '{field}' requires an order clause on '{field}'"
                )));
            }
        }

        let mut free_key: Option<&str> = None;
        for clause in declared {
            let field = clause.field.as_str();
            if inequality.contains(field) {
                if let Some(free) = free_key {
                    return Err(QueryError::index_constraint(format!(
                        "order on '{free}' precedes inequality field '{field}'"
                    )));
                }
            } else if !equality.contains(field) && free_key.is_none() {
                free_key = Some(field);
            }
        }

        Ok(())
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl From<FilterClause> for Constraint {
    fn from(clause: FilterClause) -> Self {
        Self::Filter(clause)
    }
}

impl From<OrderClause> for Constraint {
    fn from(clause: OrderClause) -> Self {
        Self::Order(clause)
    }
}
