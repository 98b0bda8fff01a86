use std::cmp::Ordering;

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Apply this direction to an ascending comparison.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

///
/// OrderClause
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderClause {
    pub field: String,
    pub direction: OrderDirection,
}

impl OrderClause {
    #[must_use]
    pub fn new(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, OrderDirection::Asc)
    }

    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, OrderDirection::Desc)
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.field.clone(), self.direction.reversed())
    }
}
