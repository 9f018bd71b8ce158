use log::{info, Level};
use yew::prelude::*;

mod config;
mod contact_form;
mod lightbox;
mod scroll;
mod window_listener;
mod components {
    pub mod contact;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod navbar;
    pub mod services;
    pub mod toast;
    pub mod why_choose_us;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    info!("Rendering Home page");
    html! { <Home /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
