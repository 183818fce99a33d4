use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::common::{
    navigator::{Section, SectionNavigator, use_menu, use_menu_provider, use_navigator},
    shadow::use_header_shadow,
    toast::ToastStack,
};
use crate::config::SiteConfig;

// every section except login, which gets its own button after the shop link
fn nav_entries() -> impl Iterator<Item = Section> {
    Section::ALL.into_iter().filter(|s| *s != Section::Login)
}

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    target: Section,
    class: &'static str,
    navigator: SectionNavigator,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let navigator = props.navigator;
    let target = props.target;

    rsx! {
        button {
            class: props.class,
            r#type: "button",
            onclick: move |_| navigator.go_to(target),
            "{target.label()}"
        }
    }
}

#[component]
fn MobileMenu(navigator: SectionNavigator, storefront_url: String) -> Element {
    rsx! {
        div { class: "mobile-menu",
            for target in nav_entries() {
                NavBarButton { target, class: "mobile-link", navigator }
            }
            a { class: "mobile-link", href: "{storefront_url}", "Shop" }
            NavBarButton {
                target: Section::Login,
                class: "mobile-link mobile-login",
                navigator,
            }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let config = use_context::<SiteConfig>();
    let navigator = use_navigator();
    let mut menu = use_menu();
    let shadow = use_header_shadow();

    rsx! {
        header { class: shadow.read().header_class("site-header"),
            nav { class: "container",
                div { class: "nav-container",
                    div { class: "logo",
                        span { class: "logo-text", "{config.brand_name}" }
                    }

                    div { class: "nav-links desktop-only",
                        for target in nav_entries() {
                            NavBarButton { target, class: "nav-link", navigator }
                        }
                        a { class: "nav-link", href: "{config.storefront_url}", "Shop" }
                        NavBarButton {
                                        target: Section::Login,
                            class: "btn btn-primary btn-sm",
                            navigator,
                        }
                    }

                    div { class: "mobile-only",
                        button {
                            class: "menu-toggle",
                            r#type: "button",
                            aria_label: "Toggle menu",
                            aria_expanded: "{menu.read().is_open()}",
                            onclick: move |_| menu.write().toggle(),
                            i { class: "fas fa-bars" }
                        }
                    }
                }

                if menu.read().is_open() {
                    MobileMenu { navigator, storefront_url: config.storefront_url.clone() }
                }
            }
        }
    }
}

// NavBar
//
// the layout every route renders inside.  it owns the menu state for the
// lifetime of the view and hosts the toast stack
#[component]
pub fn NavBar() -> Element {
    use_menu_provider();

    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
        ToastStack {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_entries_leave_login_to_its_button() {
        let labels: Vec<_> = nav_entries().map(Section::label).collect();

        assert_eq!(labels, vec!["Home", "Products", "Pricing", "Feedback"]);
    }
}
