//! Users list rendering: KPI row, filter bar, table and pager.

use common::format::{format_currency, format_number};
use common::model::UserRecord;
use common::view::{LoadState, RowTotals};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UsersListPage;
use crate::components::ui::{
    Button, ButtonVariant, Card, Header, Loading, Notice, NoticeKind, Pager, StatCard, TierBadge,
    Tone,
};
use crate::pages::filter_controls;

pub fn view(component: &UsersListPage, ctx: &Context<UsersListPage>) -> Html {
    let link = ctx.link();
    let rows = component.visible_rows();
    let totals = RowTotals::from_rows(rows.iter().copied());
    let total_users = component.load.data().map_or(0, |page| page.total);

    html! {
        <>
            <Header
                title="Usuarios"
                subtitle="Lista completa de usuarios del programa de fidelización"
            />
            <div class="content">
                <div class="grid grid-3">
                    <StatCard label="Total Usuarios" value={format_number(total_users)} icon="☰" tone={Tone::Cyan} />
                    <StatCard label="Total Gastado" value={format_currency(totals.total_spent)} icon="$" tone={Tone::Green} />
                    <StatCard label="Total Puntos" value={format_number(totals.total_points)} icon="TB" tone={Tone::Purple} />
                </div>

                { build_toolbar(component, link) }

                <Card
                    title="Lista de Usuarios"
                    description={format!("{} usuarios registrados en el programa", total_users)}
                >
                    if let Some(message) = component.load.error() {
                        <Notice kind={NoticeKind::Error}>{ format!("⚠️ {}", message) }</Notice>
                    }
                    if matches!(component.load, LoadState::Loading) {
                        <Loading message="Cargando usuarios..." />
                    } else {
                        { build_table(&rows, link) }
                    }
                    <Pager
                        pagination={component.pagination}
                        noun="usuarios"
                        on_prev={link.callback(|_| Msg::PrevPage)}
                        on_next={link.callback(|_| Msg::NextPage)}
                    />
                </Card>
            </div>
        </>
    }
}

fn build_toolbar(component: &UsersListPage, link: &Scope<UsersListPage>) -> Html {
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

fn build_table(rows: &[&UserRecord], link: &Scope<UsersListPage>) -> Html {
    html! {
        <div class="table-wrap">
            <table>
                <thead>
                    <tr>
                        <th>{ "Usuario" }</th>
                        <th>{ "Contacto" }</th>
                        <th>{ "Nivel" }</th>
                        <th class="num">{ "Puntos" }</th>
                        <th class="num">{ "Gastado" }</th>
                        <th class="num">{ "Compras" }</th>
                        <th class="center">{ "Acciones" }</th>
                    </tr>
                </thead>
                <tbody>
                    if rows.is_empty() {
                        <tr><td colspan="7" class="empty-row">{ "No se encontraron usuarios" }</td></tr>
                    } else {
                        { for rows.iter().map(|user| build_row(user, link)) }
                    }
                </tbody>
            </table>
        </div>
    }
}

fn build_row(user: &UserRecord, link: &Scope<UsersListPage>) -> Html {
    let national_id = user.national_id.clone();
    let inspect = link.callback(move |_| Msg::Inspect(national_id.clone()));

    html! {
        <tr key={user.national_id.clone()}>
            <td>
                <p class="cell-name">{ &user.name }</p>
                <p class="cell-sub">{ &user.national_id }</p>
            </td>
            <td>
                <p class="cell-name muted">{ user.phone.as_deref().unwrap_or("-") }</p>
                <p class="cell-sub">{ user.email.as_deref().unwrap_or("-") }</p>
            </td>
            <td><TierBadge tier={user.tier} /></td>
            <td class="num">
                <p class="cell-name">{ format_number(user.valid_points) }</p>
                <p class="cell-sub">{ format!("de {}", format_number(user.total_points)) }</p>
            </td>
            <td class="num money">{ format_currency(user.total_spent) }</td>
            <td class="num muted">{ user.purchase_count.to_string() }</td>
            <td class="center">
                <Button variant={ButtonVariant::Ghost} small=true title="Ver cliente" onclick={inspect}>
                    { "👁" }
                </Button>
            </td>
        </tr>
    }
}
