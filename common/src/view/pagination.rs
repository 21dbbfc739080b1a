use crate::format::format_number;
use crate::requests::{MAX_PAGE_SIZE, PageQuery};

/// Rows per page in the users list.
pub const USERS_PAGE_SIZE: u32 = 20;
/// Rows per page in the redemption list.
pub const READY_PAGE_SIZE: u32 = 10;
/// The dashboard reads one page at the backend maximum.
pub const DASHBOARD_PAGE_SIZE: u32 = MAX_PAGE_SIZE;

/// Server-side page position, driven by the envelope `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl Pagination {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
        }
    }

    pub fn query(&self) -> PageQuery {
        PageQuery::new(self.page, self.limit)
    }

    pub fn total_pages(&self) -> u32 {
        let limit = u64::from(self.limit.max(1));
        self.total.div_ceil(limit).min(u64::from(u32::MAX)) as u32
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Page after this one, clamped to the last page.
    pub fn next(&self) -> Self {
        let last = self.total_pages().max(1);
        Self {
            page: (self.page + 1).min(last),
            ..*self
        }
    }

    pub fn prev(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..*self
        }
    }

    /// Envelope total from a fresh response.
    pub fn with_total(self, total: u64) -> Self {
        Self { total, ..self }
    }

    /// The pager is only drawn when there is somewhere to go.
    pub fn visible(&self) -> bool {
        self.total_pages() > 1
    }

    /// "Mostrando a - b de total" for the rows on this page.
    pub fn range_text(&self) -> String {
        if self.total == 0 {
            return "Mostrando 0 de 0".to_string();
        }
        let limit = u64::from(self.limit);
        let first = u64::from(self.page.max(1) - 1) * limit + 1;
        let last = (u64::from(self.page) * limit).min(self.total);
        format!(
            "Mostrando {} - {} de {}",
            format_number(first),
            format_number(last),
            format_number(self.total)
        )
    }
}
