use crate::{cursor::CursorState, error::QueryError, obs::PlanKind};

///
/// PageRequest
///
/// One "show me page N" request against a collection of known size.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageRequest {
    /// One-based target page.
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
}

impl PageRequest {
    #[must_use]
    pub const fn new(page: u32, page_size: u32, total_count: u64) -> Self {
        Self {
            page,
            page_size,
            total_count,
        }
    }

    pub const fn validate(&self) -> Result<(), QueryError> {
        if self.page == 0 || self.page_size == 0 {
            return Err(QueryError::invalid_page(self.page, self.page_size));
        }

        Ok(())
    }

    /// `ceil(total_count / page_size)`; zero for an empty collection.
    #[must_use]
    pub fn last_page(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        let pages = self.total_count.div_ceil(u64::from(self.page_size));

        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Rows on the last page: the remainder, or a full page when the total
    /// is an exact multiple of the page size.
    #[must_use]
    pub fn last_page_len(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        let remainder = self.total_count % u64::from(self.page_size);
        if remainder == 0 {
            self.page_size
        } else {
            u32::try_from(remainder).unwrap_or(self.page_size)
        }
    }

    /// Zero-based index of the target page.
    #[must_use]
    pub const fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }
}

///
/// JumpDirection
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JumpDirection {
    Forward,
    Backward,
}

///
/// PagePlan
///
/// How one page request is served, decided once before any read.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PagePlan {
    /// Scan from the start in display order.
    FirstPage,

    /// Scan the reversed order for `len` rows, then flip them back.
    LastPage { len: u32 },

    /// Move `distance` pages relative to the cursor's page.
    RelativeJump {
        direction: JumpDirection,
        distance: u32,
    },

    /// No cursor: scan from the start and discard `skip` rows.
    OffsetScan { skip: u64 },
}

impl PagePlan {
    /// Decide how to serve `request` given the caller's current cursor.
    ///
    /// Page 1 always scans from the start; the last page always scans from
    /// the end. Anything else moves relative to the cursor when one exists.
    pub fn resolve(request: &PageRequest, cursor: Option<&CursorState>) -> Result<Self, QueryError> {
        request.validate()?;

        if request.page == 1 {
            return Ok(Self::FirstPage);
        }
        if request.page == request.last_page() {
            return Ok(Self::LastPage {
                len: request.last_page_len(),
            });
        }

        let target = request.page_index();
        let plan = match cursor {
            Some(cursor) if cursor.page_index > target => Self::RelativeJump {
                direction: JumpDirection::Backward,
                distance: cursor.page_index - target,
            },
            Some(cursor) => Self::RelativeJump {
                direction: JumpDirection::Forward,
                distance: target - cursor.page_index,
            },
            None => Self::OffsetScan {
                skip: u64::from(target) * u64::from(request.page_size),
            },
        };

        Ok(plan)
    }

    #[must_use]
    pub const fn kind(&self) -> PlanKind {
        match self {
            Self::FirstPage => PlanKind::FirstPage,
            Self::LastPage { .. } => PlanKind::LastPage,
            Self::RelativeJump {
                direction: JumpDirection::Forward,
                ..
            } => PlanKind::ForwardJump,
            Self::RelativeJump {
                direction: JumpDirection::Backward,
                ..
            } => PlanKind::BackwardJump,
            Self::OffsetScan { .. } => PlanKind::OffsetScan,
        }
    }

    /// True when the plan scans the reversed ordering.
    #[must_use]
    pub const fn scans_reversed(&self) -> bool {
        matches!(
            self,
            Self::LastPage { .. }
                | Self::RelativeJump {
                    direction: JumpDirection::Backward,
                    ..
                }
        )
    }
}
