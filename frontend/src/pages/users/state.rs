//! State of the users list.
//!
//! Only one page of users is held at a time. The search box and tier select
//! narrow that page client-side; paging asks the API for another page.

use common::model::{UserRecord, UsersPage};
use common::view::{LoadState, Pagination, RequestSequence, RowFilter, USERS_PAGE_SIZE};

pub struct UsersListPage {
    pub load: LoadState<UsersPage>,
    pub pagination: Pagination,
    pub filter: RowFilter,
    pub sequence: RequestSequence,
}

impl UsersListPage {
    pub fn new() -> Self {
        Self {
            load: LoadState::Idle,
            pagination: Pagination::new(USERS_PAGE_SIZE),
            filter: RowFilter::default(),
            sequence: RequestSequence::default(),
        }
    }

    /// Rows of the fetched page that pass the filter; empty while loading or
    /// after a failure.
    pub fn visible_rows(&self) -> Vec<&UserRecord> {
        match self.load.data() {
            Some(page) => self.filter.apply(&page.users),
            None => Vec::new(),
        }
    }
}
