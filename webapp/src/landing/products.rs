use dioxus::prelude::*;

use super::catalog::{PLANS, Plan};
use crate::common::navigator::Section;
use crate::config::SiteConfig;

#[derive(Clone, PartialEq, Props)]
struct PlanCardProps {
    index: usize,
    storefront_url: String,
}

#[component]
fn PlanCard(props: PlanCardProps) -> Element {
    let plan: &Plan = &PLANS[props.index];

    rsx! {
        div { class: if plan.popular { "card plan-card plan-popular" } else { "card plan-card" },
            if plan.popular {
                div { class: "plan-badge",
                    span { "Most Popular" }
                }
            }
            img { class: "plan-image", src: plan.image_url, alt: plan.image_alt }
            h3 { class: "plan-name", "{plan.name}" }
            p { class: "plan-blurb", "{plan.blurb}" }
            ul { class: "plan-features",
                for feature in plan.features.iter() {
                    li {
                        i { class: "fas fa-check icon-included icon-before" }
                        "{feature}"
                    }
                }
            }
            a {
                class: if plan.popular { "btn btn-primary btn-block" } else { "btn btn-secondary btn-block" },
                href: "{props.storefront_url}",
                "Buy Now - {plan.price}"
            }
        }
    }
}

#[component]
pub fn Products() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        section { id: Section::Products.id(), class: "products-section",
            div { class: "container",
                div { class: "section-heading",
                    h2 { class: "section-title", "Our Digital Planners" }
                    p { class: "section-subtitle",
                        "Choose the perfect planner to match your study style and academic goals"
                    }
                }
                div { class: "plans-grid",
                    for index in 0..PLANS.len() {
                        PlanCard {
                            key: "{index}",
                            index,
                            storefront_url: config.storefront_url.clone(),
                        }
                    }
                }
            }
        }
    }
}
