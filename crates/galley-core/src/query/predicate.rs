use crate::value::Value;

///
/// CompareOp
///
/// Filter operators the document store can serve from its indexes.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
}

impl CompareOp {
    /// Range operators; the store requires their field to lead the sort.
    #[must_use]
    pub const fn is_inequality(self) -> bool {
        matches!(self, Self::Lt | Self::Lte | Self::Gt | Self::Gte)
    }

    /// Operators that pin a field to fixed values.
    #[must_use]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::In)
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::In => "in",
        }
    }
}

///
/// FilterClause
///

#[derive(Clone, Debug, PartialEq)]
pub struct FilterClause {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl FilterClause {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }
}
