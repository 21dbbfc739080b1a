//! Customer lookup (`/admin/clientes`).
//!
//! Searches one customer by national id and renders the full record: points,
//! redemption status, recent transactions and tier progress. Opening the page
//! with `?cedula=<id>` fills the box and searches right away.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::LookupQuery;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CustomerLookupPage;

impl Component for CustomerLookupPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let preset = ctx
            .link()
            .location()
            .and_then(|location| location.query::<LookupQuery>().ok())
            .and_then(|query| query.cedula)
            .filter(|cedula| !cedula.trim().is_empty());

        match preset {
            Some(cedula) => {
                ctx.link().send_message(Msg::Search);
                CustomerLookupPage::new(cedula)
            }
            None => CustomerLookupPage::new(String::new()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
