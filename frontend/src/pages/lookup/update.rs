use common::view::{LoadState, LookupKind, EMPTY_ID_MESSAGE};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CustomerLookupPage;
use crate::api;

const KIND: LookupKind = LookupKind::User;

pub fn update(
    component: &mut CustomerLookupPage,
    ctx: &Context<CustomerLookupPage>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetInput(value) => {
            component.input = value;
            true
        }
        Msg::Search => {
            // Any answer still in flight is now stale.
            let ticket = component.sequence.issue();
            let Some(id) = KIND.normalize(&component.input) else {
                component.result = LoadState::Failed(EMPTY_ID_MESSAGE.to_string());
                return true;
            };

            component.result = LoadState::Loading;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::lookup(KIND, &id).await;
                link.send_message(Msg::Loaded(ticket, result));
            });
            true
        }
        Msg::Loaded(ticket, result) => {
            if !component.sequence.is_current(ticket) {
                return false;
            }
            component.result = match result {
                Ok(user) => LoadState::Loaded(user),
                Err(e) => LoadState::Failed(KIND.error_message(&e)),
            };
            true
        }
        Msg::Clear => {
            component.sequence.issue();
            component.input.clear();
            component.result = LoadState::Idle;
            true
        }
    }
}
