use common::api::ApiError;
use common::model::UploadResult;
use common::view::Ticket;
use web_sys::File;

pub enum Msg {
    /// Opens the hidden file input.
    OpenPicker,
    /// A file came from the picker or a drop.
    Pick(File),
    Upload,
    Uploaded(Ticket, Result<UploadResult, ApiError>),
    Reset,
}
