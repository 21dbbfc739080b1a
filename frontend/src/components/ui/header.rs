use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Sticky page header with the signed-in admin on the right.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div>
                <h1>{ &props.title }</h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="subtitle">{ subtitle }</p>
                }
            </div>
            <div class="identity">
                <div class="avatar">{ "A" }</div>
                <div>
                    <p class="name">{ "Admin" }</p>
                    <p class="role">{ "Administrador" }</p>
                </div>
            </div>
        </header>
    }
}
