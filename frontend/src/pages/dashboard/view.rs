use common::format::{format_currency, format_number, format_percent};
use common::rules::{
    threshold_coupon_value, POINTS_PER_DOLLAR, POINTS_VALIDITY, REDEMPTION_THRESHOLD_POINTS,
};
use common::view::{DashboardSummary, LoadState, TierShare};
use yew::prelude::*;

use super::{DashboardPage, Msg};
use crate::components::ui::{
    Button, ButtonVariant, Card, Header, Loading, Notice, NoticeKind, StatCard, TierBadge, Tone,
};

pub fn view(component: &DashboardPage, ctx: &Context<DashboardPage>) -> Html {
    let body = match &component.summary {
        LoadState::Loaded(summary) => build_summary(summary),
        LoadState::Failed(message) => html! {
            <Notice kind={NoticeKind::Error}>
                <div class="row spread">
                    <span>{ format!("⚠️ {}", message) }</span>
                    <Button variant={ButtonVariant::Outline} small=true onclick={ctx.link().callback(|_| Msg::Fetch)}>
                        { "Reintentar" }
                    </Button>
                </div>
            </Notice>
        },
        LoadState::Idle | LoadState::Loading => html! { <Loading message="Cargando resumen..." /> },
    };

    html! {
        <>
            <Header title="Dashboard" subtitle="Resumen del programa de fidelización Club Soytechno" />
            <div class="content">
                { body }
                { build_rules() }
            </div>
        </>
    }
}

fn build_summary(summary: &DashboardSummary) -> Html {
    html! {
        <>
            <div class="grid grid-4">
                <StatCard label="Total Clientes" value={format_number(summary.total_users)} icon="☰" tone={Tone::Cyan} />
                <StatCard
                    label="Puntos Acumulados"
                    value={format_number(summary.total_points)}
                    icon="↗"
                    tone={Tone::Purple}
                    hint="TechnoBits totales"
                />
                <StatCard
                    label="Listos para Canje"
                    value={format_number(summary.ready_users)}
                    icon="✦"
                    tone={Tone::Amber}
                    hint={format!("clientes con ≥{} pts", REDEMPTION_THRESHOLD_POINTS)}
                />
                <StatCard
                    label="$ Canjeables"
                    value={format_currency(summary.redeemable_amount)}
                    icon="$"
                    tone={Tone::Green}
                    hint="disponibles en cupones"
                />
            </div>

            <div class="grid grid-2">
                <Card title="Distribución por Nivel">
                    { for summary.tiers.iter().map(tier_share) }
                </Card>
                <Card title="Últimos Clientes Actualizados">
                    <div class="table-wrap">
                        <table>
                            <thead>
                                <tr>
                                    <th>{ "Cliente" }</th>
                                    <th>{ "Nivel" }</th>
                                    <th class="num">{ "Puntos" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                if summary.latest_users.is_empty() {
                                    <tr><td colspan="3" class="empty-row">{ "Sin clientes registrados" }</td></tr>
                                }
                                { for summary.latest_users.iter().map(|user| html! {
                                    <tr key={user.national_id.clone()}>
                                        <td>
                                            <p class="cell-name">{ &user.name }</p>
                                            <p class="cell-sub">{ &user.national_id }</p>
                                        </td>
                                        <td><TierBadge tier={user.tier} /></td>
                                        <td class="num strong">{ format_number(user.valid_points) }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </Card>
            </div>
        </>
    }
}

fn tier_share(share: &TierShare) -> Html {
    html! {
        <div class="share row">
            <TierBadge tier={share.tier} />
            <div class="grow">
                <div class="share-head">
                    <span class="muted">{ format!("{} clientes", format_number(share.count as u64)) }</span>
                    <span class="strong">{ format_percent(share.percent) }</span>
                </div>
                <div class="bar">
                    <div class="bar-fill" style={format!("width: {}%;", share.percent.clamp(0.0, 100.0))}></div>
                </div>
            </div>
        </div>
    }
}

fn build_rules() -> Html {
    let tiles = [
        ("Acumulación", "$1 = 1 punto".to_string(), "En tienda física y online".to_string()),
        (
            "Conversión",
            format!("{} pts = $1", POINTS_PER_DOLLAR),
            "Para canje en cupones".to_string(),
        ),
        (
            "Mínimo Canje",
            format!("{} pts", REDEMPTION_THRESHOLD_POINTS),
            format!("Equivalente a ${}", threshold_coupon_value()),
        ),
        ("Vigencia", POINTS_VALIDITY.to_string(), "Desde fecha de suscripción".to_string()),
    ];

    html! {
        <Card title="Reglas del Programa TechnoBits">
            <div class="grid grid-4">
                { for tiles.into_iter().map(|(title, value, hint)| html! {
                    <div class="rule-tile">
                        <p class="strong">{ title }</p>
                        <p class="big">{ value }</p>
                        <p class="muted small">{ hint }</p>
                    </div>
                }) }
            </div>
        </Card>
    }
}
