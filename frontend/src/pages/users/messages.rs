use common::api::ApiError;
use common::model::UsersPage;
use common::view::Ticket;

pub enum Msg {
    /// Requests the current page again.
    Fetch,
    Loaded(Ticket, Result<UsersPage, ApiError>),
    SetSearch(String),
    SetTier(String),
    PrevPage,
    NextPage,
    Export,
    /// Opens the customer lookup for this identifier.
    Inspect(String),
}
