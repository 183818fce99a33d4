use dioxus::prelude::*;

use super::catalog::FEATURES;

#[component]
pub fn Features() -> Element {
    rsx! {
        section { class: "features-section",
            div { class: "container",
                div { class: "section-heading",
                    h2 { class: "section-title", "Why Choose Student Planner Pro?" }
                    p { class: "section-subtitle",
                        "Powerful features designed specifically for student success"
                    }
                }
                div { class: "features-grid",
                    for feature in FEATURES.iter() {
                        div { class: "feature-card",
                            div { class: "feature-icon",
                                i { class: "fas {feature.icon}" }
                            }
                            h3 { class: "feature-title", "{feature.title}" }
                            p { class: "feature-desc", "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}
