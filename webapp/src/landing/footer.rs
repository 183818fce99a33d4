use dioxus::prelude::*;

use crate::common::navigator::{Section, use_navigator};
use crate::config::SiteConfig;

const SOCIAL_ICONS: [&str; 4] = ["fa-facebook-f", "fa-twitter", "fa-instagram", "fa-linkedin-in"];

const SUPPORT_LINKS: [&str; 4] = ["Help Center", "Contact Us", "Terms", "Privacy"];

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let navigator = use_navigator();

    let year = config.copyright_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div { class: "footer-about",
                        h3 { class: "footer-brand", "{config.brand_name}" }
                        p {
                            "Empowering students worldwide with digital planning tools designed for academic success and personal growth."
                        }
                        div { class: "social-links",
                            for icon in SOCIAL_ICONS {
                                a { class: "social-link", href: "#",
                                    i { class: "fab {icon}" }
                                }
                            }
                        }
                    }
                    div {
                        h4 { class: "footer-heading", "Quick Links" }
                        ul { class: "footer-links",
                            li {
                                button {
                                    class: "link-button",
                                    onclick: move |_| navigator.go_to(Section::Products),
                                    "Products"
                                }
                            }
                            li {
                                button {
                                    class: "link-button",
                                    onclick: move |_| navigator.go_to(Section::Pricing),
                                    "Pricing"
                                }
                            }
                            li {
                                button {
                                    class: "link-button",
                                    onclick: move |_| navigator.go_to(Section::Feedback),
                                    "Reviews"
                                }
                            }
                            li {
                                a { href: "{config.storefront_url}", "Shop" }
                            }
                        }
                    }
                    div {
                        h4 { class: "footer-heading", "Support" }
                        ul { class: "footer-links",
                            for name in SUPPORT_LINKS {
                                li {
                                    a { href: "#", "{name}" }
                                }
                            }
                        }
                    }
                }
                div { class: "footer-bottom",
                    p { "© {year} {config.brand_name}. All rights reserved." }
                    div { class: "footer-legal",
                        a { href: "{config.storefront_url}", "Shop Now" }
                        a { href: "#", "Terms of Service" }
                        a { href: "#", "Privacy Policy" }
                    }
                }
            }
        }
    }
}
