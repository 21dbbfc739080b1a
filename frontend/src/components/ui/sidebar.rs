use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

const MENU: [(&str, &str, Route); 5] = [
    ("▦", "Dashboard", Route::Dashboard),
    ("⇪", "Carga de Datos", Route::Upload),
    ("☰", "Usuarios", Route::Users),
    ("⌕", "Consultar Cliente", Route::Lookup),
    ("✦", "Canje de Puntos", Route::Redemption),
];

/// Fixed navigation column; the entry for the current route is highlighted.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let current = use_route::<Route>();

    html! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="accent">{ "Club" }</span>{ "Soytechno" }
            </div>
            <nav>
                <ul>
                    { for MENU.into_iter().map(|(icon, title, route)| {
                        let active = current.as_ref() == Some(&route);
                        html! {
                            <li>
                                <Link<Route> to={route} classes={classes!("nav-link", active.then_some("active"))}>
                                    <span>{ icon }</span>
                                    { title }
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
            <div class="sidebar-footer">{ "⚙ Panel Administrativo" }</div>
        </aside>
    }
}
