use dioxus::prelude::*;

use super::catalog::TESTIMONIALS;
use crate::common::navigator::Section;

#[component]
pub fn Feedback() -> Element {
    rsx! {
        section { id: Section::Feedback.id(), class: "feedback-section",
            div { class: "container",
                div { class: "section-heading",
                    h2 { class: "section-title", "What Students Say" }
                    p { class: "section-subtitle", "Join thousands of successful students worldwide" }
                }
                div { class: "testimonials-grid",
                    for testimonial in TESTIMONIALS.iter() {
                        div { class: "card testimonial-card",
                            div { class: "testimonial-stars",
                                for _ in 0..testimonial.stars {
                                    i { class: "fas fa-star" }
                                }
                            }
                            p { class: "testimonial-quote", "\"{testimonial.quote}\"" }
                            div { class: "testimonial-author",
                                div { class: "avatar",
                                    i { class: "fas fa-user" }
                                }
                                div {
                                    h4 { class: "author-name", "{testimonial.name}" }
                                    p { class: "author-role", "{testimonial.role}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
