use common::model::check_file_name;
use common::view::LoadState;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UploadPage;
use crate::api;

pub fn update(component: &mut UploadPage, ctx: &Context<UploadPage>, msg: Msg) -> bool {
    match msg {
        Msg::OpenPicker => {
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::Pick(file) => {
            match check_file_name(&file.name()) {
                Ok(_) => {
                    component.file = Some(file);
                    component.rejection = None;
                    component.upload = LoadState::Idle;
                }
                Err(rejection) => {
                    component.file = None;
                    component.rejection = Some(rejection.to_string());
                    component.clear_input();
                }
            }
            true
        }
        Msg::Upload => {
            let Some(file) = component.file.clone() else {
                return false;
            };
            let ticket = component.sequence.issue();
            component.rejection = None;
            component.upload = LoadState::Loading;

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::upload(file).await;
                link.send_message(Msg::Uploaded(ticket, result));
            });
            true
        }
        Msg::Uploaded(ticket, result) => {
            if !component.sequence.is_current(ticket) {
                return false;
            }
            match result {
                Ok(summary) => {
                    component.file = None;
                    component.clear_input();
                    component.upload = LoadState::Loaded(summary);
                }
                Err(e) => component.upload = LoadState::Failed(e.upload_message()),
            }
            true
        }
        Msg::Reset => {
            component.sequence.issue();
            component.file = None;
            component.rejection = None;
            component.upload = LoadState::Idle;
            component.clear_input();
            true
        }
    }
}
