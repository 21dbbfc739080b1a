use common::model::UploadResult;
use common::view::{LoadState, RequestSequence};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

pub struct UploadPage {
    /// File waiting to be submitted; only set once its extension passed.
    pub file: Option<File>,
    /// Why the last picked file was refused.
    pub rejection: Option<String>,
    pub upload: LoadState<UploadResult>,
    pub sequence: RequestSequence,
    pub file_input_ref: NodeRef,
}

impl UploadPage {
    pub fn new() -> Self {
        Self {
            file: None,
            rejection: None,
            upload: LoadState::Idle,
            sequence: RequestSequence::default(),
            file_input_ref: NodeRef::default(),
        }
    }

    /// Empties the hidden input so picking the same file again fires `change`.
    pub fn clear_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.rejection.as_deref().or_else(|| self.upload.error())
    }
}
