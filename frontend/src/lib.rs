use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod motion {
    pub mod carousel;
    pub mod choreography;
    pub mod crossfade;
    pub mod smooth_scroll;
}
pub mod components {
    pub mod carousel;
    pub mod download_widget;
    pub mod hero_video;
    pub mod site_header;
}
pub mod pages {
    pub mod landing;
    pub mod not_found;
    pub mod sections;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
