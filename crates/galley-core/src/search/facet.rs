use crate::{
    CREATED_AT, UPDATED_AT,
    query::{ConstraintSet, FieldRef, FilterClause, OrderClause},
    value::{Timestamp, Value},
};

///
/// EqualityFacet
/// Category-style `field == value` filter.
///

#[derive(Clone, Debug, PartialEq)]
pub struct EqualityFacet {
    pub field: String,
    pub value: Value,
}

impl EqualityFacet {
    #[must_use]
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

///
/// PrefixFacet
/// Free-text "starts with" search on a caller-chosen field.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrefixFacet {
    pub field: String,
    pub prefix: String,
}

impl PrefixFacet {
    #[must_use]
    pub fn new(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            prefix: prefix.into(),
        }
    }

    /// Blank prefixes do not filter.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.prefix.trim().is_empty()
    }
}

///
/// RangeFacet
/// Date-window style bounds; either side may be open.
///

#[derive(Clone, Debug, PartialEq)]
pub struct RangeFacet {
    pub field: String,
    pub start: Option<Value>,
    pub end: Option<Value>,
}

impl RangeFacet {
    #[must_use]
    pub fn new(field: impl Into<String>, start: Option<Value>, end: Option<Value>) -> Self {
        Self {
            field: field.into(),
            start,
            end,
        }
    }

    /// Whole-day window: from the start of `from`'s day to the last
    /// nanosecond of `to`'s day.
    #[must_use]
    pub fn days(field: impl Into<String>, from: Option<Timestamp>, to: Option<Timestamp>) -> Self {
        Self::new(
            field,
            from.map(|t| Value::Timestamp(t.start_of_day())),
            to.map(|t| Value::Timestamp(t.end_of_day())),
        )
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    fn filters(&self) -> impl Iterator<Item = FilterClause> + '_ {
        let field = FieldRef::new(&self.field);
        let low = self.start.clone().map(|v| field.gte(v));
        let high = self.end.clone().map(|v| field.lte(v));

        low.into_iter().chain(high)
    }
}

///
/// ForeignKeyFacet
///
/// Text search on a joined collection: prefix-match `reference_field` in
/// `reference_collection`, then keep primary rows whose `foreign_field`
/// holds one of the matched ids.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForeignKeyFacet {
    pub reference_collection: String,
    pub reference_field: String,
    pub prefix: String,
    pub foreign_field: String,
}

impl ForeignKeyFacet {
    #[must_use]
    pub fn new(
        reference_collection: impl Into<String>,
        reference_field: impl Into<String>,
        prefix: impl Into<String>,
        foreign_field: impl Into<String>,
    ) -> Self {
        Self {
            reference_collection: reference_collection.into(),
            reference_field: reference_field.into(),
            prefix: prefix.into(),
            foreign_field: foreign_field.into(),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.prefix.trim().is_empty()
    }

    /// Constraints run against the reference collection.
    #[must_use]
    pub fn reference_constraints(&self) -> ConstraintSet {
        FieldRef::new(&self.reference_field).prefix_search(&self.prefix)
    }
}

///
/// SearchFacets
///
/// Every facet a table screen can combine. Inactive facets contribute
/// nothing.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchFacets {
    pub ranges: Vec<RangeFacet>,
    pub only_modified: bool,
    pub category: Option<EqualityFacet>,
    pub prefix: Option<PrefixFacet>,
    pub foreign: Option<ForeignKeyFacet>,
}

impl SearchFacets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_range(mut self, range: RangeFacet) -> Self {
        self.ranges.push(range);
        self
    }

    #[must_use]
    pub const fn with_only_modified(mut self, only_modified: bool) -> Self {
        self.only_modified = only_modified;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: EqualityFacet) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: PrefixFacet) -> Self {
        self.prefix = Some(prefix);
        self
    }

    #[must_use]
    pub fn with_foreign(mut self, foreign: ForeignKeyFacet) -> Self {
        self.foreign = Some(foreign);
        self
    }

    /// True when no facet would filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.ranges.iter().any(RangeFacet::is_active)
            && !self.only_modified
            && self.category.is_none()
            && !self.prefix.as_ref().is_some_and(PrefixFacet::is_active)
            && !self.foreign.as_ref().is_some_and(ForeignKeyFacet::is_active)
    }

    #[must_use]
    pub fn active_foreign(&self) -> Option<&ForeignKeyFacet> {
        self.foreign.as_ref().filter(|f| f.is_active())
    }

    /// Constraint set for the primary collection, without any resolved
    /// foreign-key filter.
    #[must_use]
    pub fn constraints(&self) -> ConstraintSet {
        self.constraints_with(None)
    }

    /// Constraint set in declaration order:
    ///
    /// 1. range filters, then one ascending order per range field
    /// 2. only-modified filter and `updatedAt asc`
    /// 3. category equality and its ascending order
    /// 4. resolved foreign-key `in` filter
    /// 5. prefix range filters and their ascending order
    /// 6. `createdAt desc`, only when no range is active
    #[must_use]
    pub fn constraints_with(&self, foreign_filter: Option<FilterClause>) -> ConstraintSet {
        let mut set = ConstraintSet::new();

        let ranges: Vec<&RangeFacet> = self.ranges.iter().filter(|r| r.is_active()).collect();
        for range in &ranges {
            for filter in range.filters() {
                set = set.filter(filter);
            }
        }
        let mut range_fields: Vec<&str> = Vec::new();
        for range in &ranges {
            if !range_fields.contains(&range.field.as_str()) {
                range_fields.push(&range.field);
                set = set.order(OrderClause::asc(range.field.as_str()));
            }
        }

        if self.only_modified {
            let updated = FieldRef::new(UPDATED_AT);
            set = set
                .filter(updated.gt(Timestamp::UNIX_EPOCH))
                .order(updated.asc());
        }

        if let Some(category) = &self.category {
            let field = FieldRef::new(&category.field);
            set = set
                .filter(field.eq(category.value.clone()))
                .order(field.asc());
        }

        if let Some(filter) = foreign_filter {
            set = set.filter(filter);
        }

        if let Some(prefix) = self.prefix.as_ref().filter(|p| p.is_active()) {
            set = set.and(FieldRef::new(&prefix.field).prefix_search(&prefix.prefix));
        }

        if ranges.is_empty() {
            set = set.order(OrderClause::desc(CREATED_AT));
        }

        set
    }
}
