//! Rendering of the customer lookup.
//!
//! Layout, top to bottom: search form, profile, four metric cards, redemption
//! status, recent transactions, tier progress and the date/amount footer.
//! Nothing below the form is shown until a record has loaded; before the
//! first search an empty-state card takes its place.

use common::format::{format_currency, format_number, format_percent, format_signed};
use common::model::{StageState, UserRecord};
use common::rules::{RedemptionProgress, COUPON_MIN_PURCHASE, REDEMPTION_THRESHOLD_POINTS};
use common::view::{recent_transactions, LoadState};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CustomerLookupPage;
use crate::components::ui::{Button, ButtonVariant, Card, Header, Notice, NoticeKind, TierBadge};

pub fn view(component: &CustomerLookupPage, ctx: &Context<CustomerLookupPage>) -> Html {
    html! {
        <>
            <Header
                title="Consulta de Clientes"
                subtitle="Buscar información de puntos y nivel por cédula"
            />
            <div class="content">
                <div class="narrow">
                    { build_search(component, ctx.link()) }
                    {
                        match &component.result {
                            LoadState::Loaded(user) => build_record(user),
                            LoadState::Idle => build_empty_state(),
                            LoadState::Loading | LoadState::Failed(_) => html! {},
                        }
                    }
                </div>
            </div>
        </>
    }
}

fn build_search(component: &CustomerLookupPage, link: &Scope<CustomerLookupPage>) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        Msg::SetInput(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Search
    });
    let show_clear = !matches!(component.result, LoadState::Idle);

    html! {
        <Card
            title="Buscar Cliente"
            description="Ingresa la cédula del cliente para consultar sus puntos y nivel"
        >
            <form class="row" {onsubmit}>
                <div class="grow">
                    <input
                        class="input wide"
                        type="text"
                        placeholder="Ej: V-12345678"
                        value={component.input.clone()}
                        {oninput}
                    />
                    if let Some(message) = component.result.error() {
                        <p class="field-error">{ message }</p>
                    }
                </div>
                <Button kind="submit" loading={component.result.is_loading()}>{ "⌕ Buscar" }</Button>
                if show_clear {
                    <Button variant={ButtonVariant::Outline} onclick={link.callback(|_| Msg::Clear)}>
                        { "Limpiar" }
                    </Button>
                }
            </form>
        </Card>
    }
}

fn build_record(user: &UserRecord) -> Html {
    html! {
        <>
            { build_profile(user) }
            <div class="grid grid-4">
                { metric("Puntos Totales", format_number(user.total_points)) }
                { metric("Total Gastado", format_currency(user.total_spent)) }
                { metric("Listos para Canje", format_number(user.ready_points)) }
                { metric("Compras Totales", format_number(user.purchase_count)) }
            </div>
            { build_redemption(user) }
            { build_transactions(user) }
            { build_tier_progress(user) }
            <Card>
                <div class="facts">
                    <div>
                        <p class="muted">{ "Fecha de Suscripción" }</p>
                        <p class="strong">{ user.subscribed_at.as_deref().unwrap_or("-") }</p>
                    </div>
                    <div>
                        <p class="muted">{ "Última Actualización" }</p>
                        <p class="strong">{ user.updated_at.as_deref().unwrap_or("-") }</p>
                    </div>
                    <div>
                        <p class="muted">{ "$ Canjeables" }</p>
                        <p class="money">{ format_currency(user.redeemable_amount) }</p>
                    </div>
                </div>
            </Card>
        </>
    }
}

fn build_profile(user: &UserRecord) -> Html {
    html! {
        <Card>
            <div class="profile">
                <div class="stat-icon tone-cyan">{ "👤" }</div>
                <div class="grow">
                    <h2>{ &user.name }</h2>
                    <p class="muted">{ &user.national_id }</p>
                    <p>
                        <TierBadge tier={user.tier} />
                        <span class="muted small">{ format!(" {}", user.tier.info().description) }</span>
                    </p>
                    <div class="contact">
                        if let Some(phone) = &user.phone {
                            <span>{ format!("☎ {}", phone) }</span>
                        }
                        if let Some(email) = &user.email {
                            <span>{ format!("✉ {}", email) }</span>
                        }
                    </div>
                </div>
                <div class="highlight">
                    <p class="small">{ "Puntos Vigentes" }</p>
                    <p class="value">{ format_number(user.valid_points) }</p>
                    <p class="small">{ "TechnoBits" }</p>
                </div>
            </div>
        </Card>
    }
}

fn metric(label: &'static str, value: String) -> Html {
    html! {
        <section class="card">
            <div class="card-body">
                <p class="stat-label">{ label }</p>
                <p class="stat-value">{ value }</p>
            </div>
        </section>
    }
}

fn build_redemption(user: &UserRecord) -> Html {
    let progress = RedemptionProgress::for_valid_points(user.valid_points);
    let body = match progress {
        RedemptionProgress::Eligible => html! {
            <Notice kind={NoticeKind::Success}>
                <p class="strong">{ "¡Cliente elegible para canje!" }</p>
                <p>{ format!(
                    "Puede canjear {} puntos por un cupón de {}.",
                    format_number(user.ready_points),
                    format_currency(user.redeemable_amount)
                ) }</p>
                <p class="small">{ format!(
                    "Recuerda: Se requiere una compra mínima de ${} para usar el cupón.",
                    COUPON_MIN_PURCHASE
                ) }</p>
            </Notice>
        },
        RedemptionProgress::Pending { missing, percent } => html! {
            <Notice kind={NoticeKind::Neutral}>
                <p>
                    { "El cliente necesita acumular " }
                    <span class="strong">{ format!("{} puntos más", format_number(missing)) }</span>
                    { format!(" para alcanzar el mínimo de canje ({} puntos).", REDEMPTION_THRESHOLD_POINTS) }
                </p>
                <div class="share-head">
                    <span class="muted">{ "Progreso hacia el canje" }</span>
                    <span class="strong">{ format_percent(percent) }</span>
                </div>
                <div class="bar">
                    <div class="bar-fill" style={format!("width: {}%;", progress.bar_width())}></div>
                </div>
            </Notice>
        },
    };

    html! {
        <Card title="Estado de Canje">{ body }</Card>
    }
}

fn build_transactions(user: &UserRecord) -> Html {
    let (shown, note) = recent_transactions(&user.transactions);

    html! {
        <Card
            title="Historial de Transacciones"
            description={format!("Últimas {} transacciones del cliente", user.transactions.len())}
        >
            if shown.is_empty() {
                <p class="empty-row">{ "No hay transacciones registradas" }</p>
            } else {
                <div class="table-wrap">
                    <table>
                        <thead>
                            <tr>
                                <th>{ "Fecha" }</th>
                                <th>{ "Tienda" }</th>
                                <th>{ "Artículo" }</th>
                                <th class="num">{ "Cant." }</th>
                                <th class="num">{ "Monto" }</th>
                                <th class="num">{ "Puntos" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for shown.iter().enumerate().map(|(idx, tx)| {
                                let key = if tx.id.is_empty() { idx.to_string() } else { tx.id.clone() };
                                html! {
                                    <tr key={key}>
                                        <td class="muted">{ &tx.date }</td>
                                        <td>{ &tx.store }</td>
                                        <td class="muted">{ &tx.item }</td>
                                        <td class="num muted">{ format_signed(tx.quantity) }</td>
                                        <td class="num strong">{ format_currency(tx.amount) }</td>
                                        <td class="num">
                                            <span class="chip chip-cyan">{ format!("+{}", tx.points) }</span>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                    if let Some(note) = note {
                        <p class="center muted">{ note }</p>
                    }
                </div>
            }
        </Card>
    }
}

fn build_tier_progress(user: &UserRecord) -> Html {
    html! {
        <Card title="Progreso de Nivel">
            <div class="stages">
                { for user.tier.stages().into_iter().enumerate().map(|(idx, (tier, state))| {
                    let class = match state {
                        StageState::Current => "stage-current",
                        StageState::Reached => "stage-reached",
                        StageState::Pending => "stage-pending",
                    };
                    html! {
                        <div class={classes!("stage", class)}>
                            <div class="stage-dot">{ (idx + 1).to_string() }</div>
                            { tier.as_str() }
                        </div>
                    }
                }) }
            </div>
        </Card>
    }
}

fn build_empty_state() -> Html {
    html! {
        <Card>
            <div class="loading">
                <p style="font-size: 3rem; margin: 0;">{ "👤" }</p>
                <p class="strong">{ "Busca un cliente por su cédula" }</p>
                <p class="small">
                    { "Ingresa la cédula en el buscador para ver la información de puntos, nivel y transacciones" }
                </p>
            </div>
        </Card>
    }
}
