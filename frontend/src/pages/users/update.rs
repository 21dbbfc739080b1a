use common::view::{LoadState, Pagination, TierFilter};
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::messages::Msg;
use super::state::UsersListPage;
use crate::api;
use crate::app::{LookupQuery, Route};
use crate::helpers::{export_rows, show_toast};

pub fn update(component: &mut UsersListPage, ctx: &Context<UsersListPage>, msg: Msg) -> bool {
    match msg {
        Msg::Fetch => {
            let ticket = component.sequence.issue();
            component.load = LoadState::Loading;

            let link = ctx.link().clone();
            let query = component.pagination.query();
            spawn_local(async move {
                let result = api::fetch_users(query).await;
                link.send_message(Msg::Loaded(ticket, result));
            });
            true
        }
        Msg::Loaded(ticket, result) => {
            if !component.sequence.is_current(ticket) {
                return false;
            }
            match result {
                Ok(page) => {
                    component.pagination = component.pagination.with_total(page.total);
                    component.load = LoadState::Loaded(page);
                }
                Err(e) => {
                    component.pagination = component.pagination.with_total(0);
                    component.load = LoadState::Failed(e.list_message());
                }
            }
            true
        }
        Msg::SetSearch(search) => {
            component.filter.search = search;
            true
        }
        Msg::SetTier(value) => {
            component.filter.tier = TierFilter::from_select_value(&value);
            true
        }
        Msg::PrevPage => {
            let target = component.pagination.prev();
            move_to(component, ctx, target)
        }
        Msg::NextPage => {
            let target = component.pagination.next();
            move_to(component, ctx, target)
        }
        Msg::Export => {
            export_rows(component.visible_rows());
            false
        }
        Msg::Inspect(national_id) => {
            let query = LookupQuery {
                cedula: Some(national_id),
            };
            let pushed = ctx
                .link()
                .navigator()
                .map(|navigator| navigator.push_with_query(&Route::Lookup, &query));
            if !matches!(pushed, Some(Ok(()))) {
                error!("could not open the customer lookup");
                show_toast("No se pudo abrir la consulta del cliente");
            }
            false
        }
    }
}

fn move_to(
    component: &mut UsersListPage,
    ctx: &Context<UsersListPage>,
    target: Pagination,
) -> bool {
    if target == component.pagination {
        return false;
    }
    component.pagination = target;
    ctx.link().send_message(Msg::Fetch);
    true
}
