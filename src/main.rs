use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod countdown;
mod disclosure;
mod scheduler;
mod seo;

mod components {
    pub mod countdown;
    pub mod faq_item;
    pub mod floating_whatsapp;
    pub mod particles;
    pub mod reveal;
    pub mod section_header;
}
mod pages {
    pub mod legal;
    pub mod sales;
}

use pages::{
    legal::{CookiePolicy, PrivacyPolicy, TermsAndConditions},
    sales::SalesPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terminos")]
    Terms,
    #[at("/privacidad")]
    Privacy,
    #[at("/cookies")]
    Cookies,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering sales page");
            html! { <SalesPage /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Cookies => {
            info!("Rendering Cookies page");
            html! { <CookiePolicy /> }
        }
        Route::NotFound => {
            warn!("Unknown path, falling back to the sales page");
            html! { <SalesPage /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting sales page");
    yew::Renderer::<App>::new().render();
}
