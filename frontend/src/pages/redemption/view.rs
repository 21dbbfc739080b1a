use common::format::{format_currency, format_number};
use common::model::PointsSummary;
use common::rules::{
    threshold_coupon_value, COUPON_MIN_PURCHASE, POINTS_PER_DOLLAR, POINTS_VALIDITY,
    REDEMPTION_THRESHOLD_POINTS,
};
use common::view::{LoadState, RowTotals};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RedemptionPage;
use crate::components::ui::{
    BadgeStatus, Button, ButtonVariant, Card, Header, Loading, Notice, NoticeKind, Pager,
    StatCard, StatusBadge, TierBadge, Tone,
};
use crate::pages::filter_controls;

pub fn view(component: &RedemptionPage, ctx: &Context<RedemptionPage>) -> Html {
    let link = ctx.link();
    let rows = component.visible_rows();
    let totals = RowTotals::from_rows(rows.iter().copied());
    let shown = component.shown_page();
    let eligible = shown.map_or(0, |(page, _)| page.total);
    let is_sample = shown.is_some_and(|(_, sample)| sample);

    html! {
        <>
            <Header title="Canje de Puntos" subtitle="Clientes con puntos disponibles para canjear" />
            <div class="content">
                <div class="grid grid-3">
                    <StatCard label="Clientes Elegibles" value={format_number(eligible)} icon="☰" tone={Tone::Amber} />
                    <StatCard label="Puntos Listos" value={format_number(totals.ready_points)} icon="✦" tone={Tone::Purple} />
                    <StatCard label="Total $ Canjeables" value={format_currency(totals.redeemable_amount)} icon="$" tone={Tone::Green} />
                </div>

                { build_toolbar(component, link) }

                <Card
                    title="Clientes Listos para Canje"
                    description={format!(
                        "Clientes con al menos {} puntos vigentes (mínimo para canje)",
                        REDEMPTION_THRESHOLD_POINTS
                    )}
                >
                    if let Some(message) = component.load.error() {
                        <Notice kind={NoticeKind::Warning}>
                            { format!("⚠️ Mostrando datos de ejemplo. {}", message) }
                        </Notice>
                    }
                    if is_sample {
                        <StatusBadge status={BadgeStatus::Warning}>{ "Datos de ejemplo" }</StatusBadge>
                    }
                    if matches!(component.load, LoadState::Loading) {
                        <Loading message="Cargando clientes..." />
                    } else {
                        { build_table(&rows) }
                    }
                    <Pager
                        pagination={component.pagination}
                        noun="clientes"
                        on_prev={link.callback(|_| Msg::PrevPage)}
                        on_next={link.callback(|_| Msg::NextPage)}
                    />
                </Card>

                { build_quick_lookup(component, link) }
                { build_rules() }
            </div>
        </>
    }
}

fn build_toolbar(component: &RedemptionPage, link: &Scope<RedemptionPage>) -> Html {
    html! {
        <Card>
            <div class="row spread">
                { filter_controls(
                    &component.filter.search,
                    component.filter.tier,
                    link.callback(Msg::SetSearch),
                    link.callback(Msg::SetTier),
                ) }
                <div class="row">
                    <Button
                        variant={ButtonVariant::Outline}
                        loading={component.load.is_loading()}
                        onclick={link.callback(|_| Msg::Fetch)}
                    >
                        { "↻ Actualizar" }
                    </Button>
                    <Button variant={ButtonVariant::Secondary} onclick={link.callback(|_| Msg::Export)}>
                        { "⤓ Exportar CSV" }
                    </Button>
                </div>
            </div>
        </Card>
    }
}

fn build_table(rows: &[&PointsSummary]) -> Html {
    html! {
        <div class="table-wrap">
            <table>
                <thead>
                    <tr>
                        <th>{ "Cliente" }</th>
                        <th>{ "Nivel" }</th>
                        <th class="num">{ "Puntos Vigentes" }</th>
                        <th class="num">{ "Puntos Canje" }</th>
                        <th class="num">{ "$ Canjeables" }</th>
                    </tr>
                </thead>
                <tbody>
                    if rows.is_empty() {
                        <tr>
                            <td colspan="5" class="empty-row">
                                { "No se encontraron clientes con los filtros aplicados" }
                            </td>
                        </tr>
                    } else {
                        { for rows.iter().map(|customer| html! {
                            <tr key={customer.national_id.clone()}>
                                <td>
                                    <p class="cell-name">{ &customer.name }</p>
                                    <p class="cell-sub">{ &customer.national_id }</p>
                                </td>
                                <td><TierBadge tier={customer.tier} /></td>
                                <td class="num strong">{ format_number(customer.valid_points) }</td>
                                <td class="num">
                                    <span class="chip chip-amber">{ format_number(customer.ready_points) }</span>
                                </td>
                                <td class="num money">{ format_currency(customer.redeemable_amount) }</td>
                            </tr>
                        }) }
                    }
                </tbody>
            </table>
        </div>
    }
}

fn build_quick_lookup(component: &RedemptionPage, link: &Scope<RedemptionPage>) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        Msg::SetQuickId(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::QuickLookup
    });

    html! {
        <Card title="Consulta Rápida de Puntos" description="Verifica los puntos de un cliente por su cédula">
            <form class="row" {onsubmit}>
                <input
                    class="input"
                    type="text"
                    placeholder="Ej: V-12345678"
                    value={component.quick_input.clone()}
                    {oninput}
                />
                <Button kind="submit" loading={component.quick.is_loading()}>{ "Consultar" }</Button>
            </form>
            if let Some(message) = component.quick.error() {
                <p class="field-error">{ message }</p>
            }
            if let Some(summary) = component.quick.data() {
                <div class="row spread" style="margin-top: 1rem;">
                    <div>
                        <p class="cell-name">{ &summary.name }</p>
                        <p class="cell-sub">{ &summary.national_id }</p>
                    </div>
                    <TierBadge tier={summary.tier} />
                    <div class="num">
                        <p class="cell-name">{ format!("{} vigentes", format_number(summary.valid_points)) }</p>
                        <p class="cell-sub">{ format!("{} listos para canje", format_number(summary.ready_points)) }</p>
                    </div>
                    <span class="money">{ format_currency(summary.redeemable_amount) }</span>
                </div>
            }
        </Card>
    }
}

fn build_rules() -> Html {
    html! {
        <Card>
            <p class="cell-name">{ "Reglas de Canje" }</p>
            <ul class="rules">
                <li>{ format!(
                    "Mínimo {} puntos para generar un cupón (${})",
                    REDEMPTION_THRESHOLD_POINTS,
                    threshold_coupon_value()
                ) }</li>
                <li>{ format!("Cada {} puntos = $1 acumulable", POINTS_PER_DOLLAR) }</li>
                <li>{ format!("Se requiere compra mínima de ${} para usar el cupón", COUPON_MIN_PURCHASE) }</li>
                <li>{ format!("Los puntos tienen vigencia de {} desde la suscripción", POINTS_VALIDITY) }</li>
            </ul>
        </Card>
    }
}
