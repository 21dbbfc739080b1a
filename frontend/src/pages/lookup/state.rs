use common::model::UserRecord;
use common::view::{LoadState, RequestSequence};

pub struct CustomerLookupPage {
    /// Raw text of the search box; normalized only when searching.
    pub input: String,
    pub result: LoadState<UserRecord>,
    pub sequence: RequestSequence,
}

impl CustomerLookupPage {
    pub fn new(input: String) -> Self {
        Self {
            input,
            result: LoadState::Idle,
            sequence: RequestSequence::default(),
        }
    }
}
