//! KPI card: icon tile, label, value and an optional hint line.

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Cyan,
    Purple,
    Amber,
    Green,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Cyan => "tone-cyan",
            Tone::Purple => "tone-purple",
            Tone::Amber => "tone-amber",
            Tone::Green => "tone-green",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// Short glyph shown in the icon tile.
    pub icon: AttrValue,
    pub tone: Tone,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <section class="card">
            <div class="card-body stat">
                <div class={classes!("stat-icon", props.tone.class())}>{ &props.icon }</div>
                <div>
                    <p class="stat-label">{ &props.label }</p>
                    <p class="stat-value">{ &props.value }</p>
                    if let Some(hint) = &props.hint {
                        <p class="stat-hint">{ hint }</p>
                    }
                </div>
            </div>
        </section>
    }
}
