use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "not-found",
            div { class: "container container-narrow",
                h1 { class: "section-title", "Page not found" }
                p { class: "section-subtitle", "There is nothing at /{path}." }
                Link { to: Route::Landing {}, class: "btn btn-primary", "Back to the home page" }
            }
        }
    }
}
