//! Update logic for the redemption page.
//!
//! A failed list fetch keeps the error message and switches the table to the
//! sample rows; the next successful fetch replaces both. The quick lookup
//! runs on its own ticket sequence so it never races the list.

use common::view::{LoadState, LookupKind, Pagination, TierFilter, EMPTY_ID_MESSAGE};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RedemptionPage;
use crate::api;
use crate::helpers::export_rows;

pub fn update(component: &mut RedemptionPage, ctx: &Context<RedemptionPage>, msg: Msg) -> bool {
    match msg {
        Msg::Fetch => {
            let ticket = component.sequence.issue();
            component.load = LoadState::Loading;

            let link = ctx.link().clone();
            let query = component.pagination.query();
            spawn_local(async move {
                let result = api::fetch_ready_customers(query).await;
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
                    component.pagination = component.pagination.with_total(component.sample.total);
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
        Msg::SetQuickId(value) => {
            component.quick_input = value;
            true
        }
        Msg::QuickLookup => {
            let kind = LookupKind::Customer;
            let Some(id) = kind.normalize(&component.quick_input) else {
                component.quick_sequence.issue();
                component.quick = LoadState::Failed(EMPTY_ID_MESSAGE.to_string());
                return true;
            };

            let ticket = component.quick_sequence.issue();
            component.quick = LoadState::Loading;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::lookup(kind, &id).await;
                link.send_message(Msg::QuickLoaded(ticket, result));
            });
            true
        }
        Msg::QuickLoaded(ticket, result) => {
            if !component.quick_sequence.is_current(ticket) {
                return false;
            }
            component.quick = match result {
                Ok(summary) => LoadState::Loaded(summary),
                Err(e) => LoadState::Failed(LookupKind::Customer.error_message(&e)),
            };
            true
        }
    }
}

fn move_to(component: &mut RedemptionPage, ctx: &Context<RedemptionPage>, target: Pagination) -> bool {
    if target == component.pagination {
        return false;
    }
    component.pagination = target;
    ctx.link().send_message(Msg::Fetch);
    true
}
