//! Data upload page (`/admin/carga-datos`).
//!
//! Takes one `.csv`, `.xlsx` or `.xls` file by picker or drag and drop and
//! posts it to the gateway. Only the file name is checked here; parsing is
//! the loyalty API's job, and its warnings are listed after processing.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::UploadPage;

impl Component for UploadPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        UploadPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
