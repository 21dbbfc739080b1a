use common::model::{PointsSummary, ReadyCustomersPage};
use common::view::{LoadState, Pagination, RequestSequence, RowFilter, READY_PAGE_SIZE};

pub struct RedemptionPage {
    pub load: LoadState<ReadyCustomersPage>,
    /// Shown instead of live rows while the last fetch has failed.
    pub sample: ReadyCustomersPage,
    pub pagination: Pagination,
    pub filter: RowFilter,
    pub sequence: RequestSequence,
    pub quick_input: String,
    pub quick: LoadState<PointsSummary>,
    pub quick_sequence: RequestSequence,
}

impl RedemptionPage {
    pub fn new() -> Self {
        Self {
            load: LoadState::Idle,
            sample: ReadyCustomersPage::sample(),
            pagination: Pagination::new(READY_PAGE_SIZE),
            filter: RowFilter::default(),
            sequence: RequestSequence::default(),
            quick_input: String::new(),
            quick: LoadState::Idle,
            quick_sequence: RequestSequence::default(),
        }
    }

    /// The page on screen and whether it is the sample data.
    pub fn shown_page(&self) -> Option<(&ReadyCustomersPage, bool)> {
        match &self.load {
            LoadState::Loaded(page) => Some((page, false)),
            LoadState::Failed(_) => Some((&self.sample, true)),
            LoadState::Idle | LoadState::Loading => None,
        }
    }

    pub fn visible_rows(&self) -> Vec<&PointsSummary> {
        match self.shown_page() {
            Some((page, _)) => self.filter.apply(&page.customers),
            None => Vec::new(),
        }
    }
}
