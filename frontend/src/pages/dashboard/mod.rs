//! Overview page (`/admin`).
//!
//! Reads one page of users and one of redemption-ready users at the largest
//! page size the API serves and reduces them into the KPI cards, the tier
//! breakdown and the latest-customers table.

use common::api::ApiError;
use common::requests::PageQuery;
use common::view::{DashboardSummary, LoadState, RequestSequence, Ticket, DASHBOARD_PAGE_SIZE};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

mod view;

pub enum Msg {
    Fetch,
    Loaded(Ticket, Result<DashboardSummary, ApiError>),
}

pub struct DashboardPage {
    pub summary: LoadState<DashboardSummary>,
    pub sequence: RequestSequence,
}

impl Component for DashboardPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            summary: LoadState::Idle,
            sequence: RequestSequence::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                let ticket = self.sequence.issue();
                self.summary = LoadState::Loading;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(ticket, load_summary().await));
                });
                true
            }
            Msg::Loaded(ticket, result) => {
                if !self.sequence.is_current(ticket) {
                    return false;
                }
                self.summary = match result {
                    Ok(summary) => LoadState::Loaded(summary),
                    Err(e) => LoadState::Failed(e.list_message()),
                };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

async fn load_summary() -> Result<DashboardSummary, ApiError> {
    let query = PageQuery::new(1, DASHBOARD_PAGE_SIZE);
    let users = api::fetch_users(query).await?;
    let ready = api::fetch_ready_users(query).await?;
    Ok(DashboardSummary::from_pages(&users, &ready))
}
