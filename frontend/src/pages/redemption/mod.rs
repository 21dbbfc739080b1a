//! Redemption-eligible customers (`/admin/canje`).
//!
//! - Paged list of customers whose valid points reach the redemption
//!   threshold, filtered and exported client-side.
//! - When the list cannot be fetched the error stays on screen and the table
//!   shows sample rows tagged "Datos de ejemplo".
//! - A quick points lookup by national id.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::RedemptionPage;

impl Component for RedemptionPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        RedemptionPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
