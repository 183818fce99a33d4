#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error};

mod common;

mod components;
use components::navigation::NavBar;

mod config;
use config::SiteConfig;

mod landing;
use landing::Landing;

mod not_found;
use not_found::PageNotFound;

const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// there is only the one page; anything else lands on the not-found view,
// which links back to it
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Landing {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| match config::read_config() {
        Ok(config) => config,
        Err(err) => {
            error!("failed to parse site config, using defaults: {err}");
            SiteConfig::default()
        }
    });

    use_context_provider(|| config.clone());

    use_hook(|| common::toast::TOASTS.with_mut(|q| q.set_limit(config.toast_limit)));

    rsx! {
        document::Stylesheet { href: FONT_AWESOME }
        style { "{common::style::MODERN_STYLES}" }
        style { "{common::style::LANDING_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
