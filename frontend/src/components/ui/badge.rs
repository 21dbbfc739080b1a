use common::model::Tier;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TierBadgeProps {
    pub tier: Tier,
    #[prop_or_default]
    pub class: Classes,
}

/// Rounded pill in the tier's colours.
#[function_component(TierBadge)]
pub fn tier_badge(props: &TierBadgeProps) -> Html {
    let info = props.tier.info();
    html! {
        <span class={classes!("badge", info.bg_class, info.text_class, props.class.clone())}>
            { props.tier.as_str() }
        </span>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStatus {
    Success,
    Warning,
    Error,
    Info,
}

impl BadgeStatus {
    fn class(&self) -> &'static str {
        match self {
            BadgeStatus::Success => "status-success",
            BadgeStatus::Warning => "status-warning",
            BadgeStatus::Error => "status-error",
            BadgeStatus::Info => "status-info",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: BadgeStatus,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.status.class(), props.class.clone())}>
            { props.children.clone() }
        </span>
    }
}
