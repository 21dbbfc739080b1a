//! One module per admin route. Each page is a struct component split into
//! `messages`, `state`, `update` and `view`.

pub mod dashboard;
pub mod lookup;
pub mod redemption;
pub mod upload;
pub mod users;

use common::model::Tier;
use common::view::{TierFilter, ALL_TIERS_VALUE};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Search box and tier select shared by the two list pages.
pub(crate) fn filter_controls(
    search: &str,
    tier: TierFilter,
    on_search: Callback<String>,
    on_tier: Callback<String>,
) -> Html {
    let oninput = on_search.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let onchange = on_tier.reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());
    let selected = tier.select_value();

    html! {
        <div class="row grow">
            <input
                class="input"
                type="text"
                placeholder="Buscar por nombre o cédula..."
                value={search.to_string()}
                {oninput}
            />
            <select class="select" {onchange}>
                <option value={ALL_TIERS_VALUE} selected={selected == ALL_TIERS_VALUE}>
                    { "Todos los niveles" }
                </option>
                { for Tier::ALL.into_iter().map(|t| html! {
                    <option value={t.as_str()} selected={selected == t.as_str()}>{ t.as_str() }</option>
                }) }
            </select>
        </div>
    }
}
