use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod ripple;
mod components {
    pub mod background_cells;
    pub mod cta_button;
    pub mod faq;
    pub mod icons;
    pub mod reveal;
    pub mod section_title;
}
mod pages {
    pub mod content;
    pub mod landing;
}

use config::LandingConfig;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting to Landing");
            html! { <Redirect<Route> to={Route::Landing} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Read once; the config block does not change after load
    let config = use_state(|| Rc::new(config::load_config()));

    html! {
        <ContextProvider<Rc<LandingConfig>> context={(*config).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<LandingConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
