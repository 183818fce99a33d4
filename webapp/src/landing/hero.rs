use dioxus::prelude::*;

use crate::common::navigator::Section;
use crate::config::SiteConfig;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&h=1080";

#[component]
pub fn Hero() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        section { id: Section::Home.id(), class: "hero",
            div { class: "hero-overlay" }
            div {
                class: "hero-backdrop",
                style: "background-image: url('{HERO_IMAGE}');",
            }
            div { class: "container",
                div { class: "hero-content",
                    h1 { class: "hero-title",
                        "Organize Your Studies with "
                        br {}
                        span { class: "hero-brand", "{config.brand_name}" }
                    }
                    p { class: "hero-subtitle",
                        "Create custom digital planners for students with intuitive design tools, cloud sync, and smart organization features"
                    }
                    div { class: "hero-actions",
                        a { class: "btn btn-light btn-lg", href: "{config.storefront_url}",
                            "Shop Now"
                            i { class: "fas fa-arrow-right icon-after" }
                        }
                    }
                }
            }
        }
    }
}
