use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// White panel with an optional title row.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let has_header = props.title.is_some() || props.description.is_some();
    html! {
        <section class={classes!("card", props.class.clone())}>
            if has_header {
                <div class="card-header">
                    if let Some(title) = &props.title {
                        <h3 class="card-title">{ title }</h3>
                    }
                    if let Some(description) = &props.description {
                        <p class="card-description">{ description }</p>
                    }
                </div>
            }
            <div class="card-body">{ props.children.clone() }</div>
        </section>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Warning,
    Success,
    Neutral,
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub kind: NoticeKind,
    #[prop_or_default]
    pub children: Html,
}

/// Inline message box used for errors and results.
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    let class = match props.kind {
        NoticeKind::Error => "notice-error",
        NoticeKind::Warning => "notice-warning",
        NoticeKind::Success => "notice-success",
        NoticeKind::Neutral => "notice-neutral",
    };
    html! {
        <div class={classes!("notice", class)}>{ props.children.clone() }</div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub message: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{ &props.message }</p>
        </div>
    }
}
