//! Root component: router, sidebar and the page area.

use serde::{Deserialize, Serialize};
use yew::{html, Component, Context, Html};
use yew_router::prelude::*;

use crate::components::ui::{Card, Header, Sidebar};
use crate::pages::dashboard::DashboardPage;
use crate::pages::lookup::CustomerLookupPage;
use crate::pages::redemption::RedemptionPage;
use crate::pages::upload::UploadPage;
use crate::pages::users::UsersListPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/admin")]
    Dashboard,
    #[at("/admin/carga-datos")]
    Upload,
    #[at("/admin/usuarios")]
    Users,
    #[at("/admin/clientes")]
    Lookup,
    #[at("/admin/canje")]
    Redemption,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query string of `/admin/clientes`; a present `cedula` is searched on mount.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LookupQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cedula: Option<String>,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Upload => html! { <UploadPage /> },
        Route::Users => html! { <UsersListPage /> },
        Route::Lookup => html! { <CustomerLookupPage /> },
        Route::Redemption => html! { <RedemptionPage /> },
        Route::NotFound => html! {
            <>
                <Header title="Página no encontrada" />
                <div class="content">
                    <Card title="404" description="La página que buscas no existe.">
                        <Link<Route> to={Route::Dashboard} classes="btn btn-primary">
                            { "Volver al Dashboard" }
                        </Link<Route>>
                    </Card>
                </div>
            </>
        },
    }
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <div class="layout">
                    <Sidebar />
                    <main class="main">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        }
    }
}
