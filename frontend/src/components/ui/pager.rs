use common::view::Pagination;
use yew::prelude::*;

use super::button::{Button, ButtonVariant};

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub pagination: Pagination,
    /// Plural noun appended to the range, e.g. "usuarios".
    pub noun: AttrValue,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

/// Previous/next controls under a list. Renders nothing for a single page.
#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let pagination = props.pagination;
    if !pagination.visible() {
        return Html::default();
    }

    let on_prev = props.on_prev.reform(|_: MouseEvent| ());
    let on_next = props.on_next.reform(|_: MouseEvent| ());

    html! {
        <div class="pager">
            <p>{ format!("{} {}", pagination.range_text(), props.noun) }</p>
            <div class="row">
                <Button variant={ButtonVariant::Outline} small=true disabled={!pagination.has_prev()} onclick={on_prev}>
                    { "‹" }
                </Button>
                <span>{ format!("Página {} de {}", pagination.page, pagination.total_pages()) }</span>
                <Button variant={ButtonVariant::Outline} small=true disabled={!pagination.has_next()} onclick={on_next}>
                    { "›" }
                </Button>
            </div>
        </div>
    }
}
