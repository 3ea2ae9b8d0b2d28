use yew::prelude::*;
use log::{info, Level};

mod config;
mod contact;
mod dom;
mod nav;
mod relay;
mod reveal;
mod components {
    pub mod contact_form;
    pub mod nav_bar;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
