use dioxus::prelude::*;

use super::catalog::{COMPARISON, Cell, PLANS};
use crate::common::navigator::Section;

fn comparison_cell(cell: Cell) -> Element {
    match cell {
        Cell::Included => rsx! {
            i { class: "fas fa-check icon-included" }
        },
        Cell::IncludedWith(note) => rsx! {
            i { class: "fas fa-check icon-included" }
            div { class: "cell-note", "{note}" }
        },
        Cell::Excluded => rsx! {
            i { class: "fas fa-times icon-excluded" }
        },
        Cell::Text(note) => rsx! {
            div { class: "cell-note", "{note}" }
        },
    }
}

#[component]
pub fn Pricing() -> Element {
    rsx! {
        section { id: Section::Pricing.id(), class: "pricing-section",
            div { class: "container",
                div { class: "section-heading",
                    h2 { class: "section-title", "Compare Our Planners" }
                    p { class: "section-subtitle", "Find the perfect match for your academic needs" }
                }
                div { class: "card table-wrapper",
                    table { class: "comparison-table",
                        thead {
                            tr {
                                th { "Features" }
                                for plan in PLANS.iter() {
                                    th {
                                        "{plan.short_name}"
                                        br {}
                                        span { class: "plan-price", "{plan.price}" }
                                    }
                                }
                            }
                        }
                        tbody {
                            for row in COMPARISON.iter() {
                                tr {
                                    td { class: "feature-name", "{row.feature}" }
                                    for cell in row.cells {
                                        td { {comparison_cell(cell)} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
