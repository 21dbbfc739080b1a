use common::api::ApiError;
use common::model::UserRecord;
use common::view::Ticket;

pub enum Msg {
    SetInput(String),
    Search,
    Loaded(Ticket, Result<UserRecord, ApiError>),
    Clear,
}
