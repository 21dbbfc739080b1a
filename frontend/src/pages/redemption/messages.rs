use common::api::ApiError;
use common::model::{PointsSummary, ReadyCustomersPage};
use common::view::Ticket;

pub enum Msg {
    Fetch,
    Loaded(Ticket, Result<ReadyCustomersPage, ApiError>),
    SetSearch(String),
    SetTier(String),
    PrevPage,
    NextPage,
    Export,
    SetQuickId(String),
    QuickLookup,
    QuickLoaded(Ticket, Result<PointsSummary, ApiError>),
}
