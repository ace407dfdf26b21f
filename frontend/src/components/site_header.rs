use yew::prelude::*;

use crate::content::{LOGO, NAV_LINKS};

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    /// Receives the `scrolled` and `past-video` classes from the scroll
    /// choreography.
    pub node_ref: NodeRef,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    html! {
        <header class="header" ref={props.node_ref.clone()}>
            <nav class="navbar">
                <div class="nav-brand">
                    <img src={LOGO} alt="Investza" class="logo" />
                </div>
                <ul class="nav-menu">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <li><a href={link.href}>{link.label}</a></li>
                    }) }
                </ul>
                <div class="nav-cta">
                    <button class="nav-button">{"Review my Portfolio"}</button>
                </div>
            </nav>
        </header>
    }
}
