use std::fmt;

use dioxus::prelude::*;
use tracing::debug;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};

// Section
//
// the anchors the page renders.  markup uses id() for the element ids and the
// navigation buttons use it for their targets, so the two cannot drift apart
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Products,
    Pricing,
    Feedback,
    Login,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Products,
        Section::Pricing,
        Section::Feedback,
        Section::Login,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Products => "products",
            Section::Pricing => "pricing",
            Section::Feedback => "feedback",
            Section::Login => "login",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Products => "Products",
            Section::Pricing => "Pricing",
            Section::Feedback => "Feedback",
            Section::Login => "Member Login",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

// SectionLookup
//
// finds an anchor by id and scrolls it into view, returning false when the
// anchor is not in the view
pub trait SectionLookup {
    fn scroll_into_view(&self, section_id: &str) -> bool;
}

// a missing anchor is a silent no-op: no scroll, no error, and the menu keeps
// whatever state it had
pub fn scroll_to_section<L>(view: &L, menu: &mut MenuState, section_id: &str) -> bool
where
    L: SectionLookup + ?Sized,
{
    if !view.scroll_into_view(section_id) {
        return false;
    }

    menu.close();
    true
}

pub struct DomSections {
    document: Document,
}

impl DomSections {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(DomSections { document })
    }
}

impl SectionLookup for DomSections {
    fn scroll_into_view(&self, section_id: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(section_id) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

// SectionNavigator
//
// what the buttons actually hold.  the menu signal comes from the layout's
// context, so every navigator on the page closes the same menu
#[derive(Clone, Copy, PartialEq)]
pub struct SectionNavigator {
    menu: Signal<MenuState>,
}

impl SectionNavigator {
    pub fn go(&self, section_id: &str) {
        if let Some(view) = DomSections::current() {
            self.go_with(&view, section_id);
        }
    }

    // the menu signal is only written when the scroll happened
    pub fn go_with<L>(&self, view: &L, section_id: &str) -> bool
    where
        L: SectionLookup + ?Sized,
    {
        let mut menu = self.menu;
        let mut next = *menu.peek();
        if !scroll_to_section(view, &mut next, section_id) {
            return false;
        }

        debug!(section_id, "scrolled to section");
        menu.set(next);
        true
    }

    pub fn go_to(&self, section: Section) {
        self.go(section.id())
    }
}

pub fn use_menu_provider() -> Signal<MenuState> {
    use_context_provider(|| Signal::new(MenuState::default()))
}

pub fn use_menu() -> Signal<MenuState> {
    use_context::<Signal<MenuState>>()
}

pub fn use_navigator() -> SectionNavigator {
    SectionNavigator { menu: use_menu() }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    // an in-memory view that records which anchors it scrolled to
    struct FakeView {
        anchors: HashSet<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeView {
        fn with(anchors: &[&'static str]) -> Self {
            FakeView {
                anchors: anchors.iter().copied().collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }

        fn full_page() -> Self {
            let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
            FakeView::with(&ids)
        }
    }

    impl SectionLookup for FakeView {
        fn scroll_into_view(&self, section_id: &str) -> bool {
            if self.anchors.contains(section_id) {
                self.scrolled.borrow_mut().push(section_id.to_owned());
                true
            } else {
                false
            }
        }
    }

    fn open_menu() -> MenuState {
        let mut menu = MenuState::default();
        menu.toggle();
        menu
    }

    #[test]
    fn every_section_scrolls_and_closes_the_menu() {
        let view = FakeView::full_page();

        for section in Section::ALL {
            let mut menu = open_menu();

            assert!(scroll_to_section(&view, &mut menu, section.id()));
            assert!(!menu.is_open(), "menu left open after {section}");
        }

        let scrolled = view.scrolled.borrow();
        assert_eq!(*scrolled, vec!["home", "products", "pricing", "feedback", "login"]);
    }

    #[test]
    fn closed_menu_stays_closed() {
        let view = FakeView::full_page();
        let mut menu = MenuState::default();

        assert!(scroll_to_section(&view, &mut menu, "pricing"));
        assert!(!menu.is_open());
    }

    #[test]
    fn missing_anchor_is_silent() {
        let view = FakeView::with(&["home"]);
        let mut menu = open_menu();

        assert!(!scroll_to_section(&view, &mut menu, "testimonials"));
        assert!(view.scrolled.borrow().is_empty());
        // nothing happened, so nothing closed
        assert!(menu.is_open());
    }

    #[test]
    fn section_known_but_not_rendered() {
        let view = FakeView::with(&["home", "products"]);
        let mut menu = open_menu();

        assert!(!scroll_to_section(&view, &mut menu, Section::Login.id()));
        assert!(menu.is_open());
    }

    #[test]
    fn toggle_flips_each_press() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());

        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    // (scrolled, menu open afterwards) for each go_with call
    type NavLog = Rc<RefCell<Vec<(bool, bool)>>>;

    fn navigate_with_open_menu(log: NavLog) -> Element {
        let menu = use_signal(open_menu);
        let navigator = SectionNavigator { menu };

        use_hook(move || {
            let view = FakeView::with(&["pricing"]);

            for section_id in ["nope", "pricing"] {
                let scrolled = navigator.go_with(&view, section_id);
                log.borrow_mut().push((scrolled, menu.peek().is_open()));
            }
        });

        rsx! {}
    }

    #[test]
    fn navigator_writes_the_menu_signal_only_on_a_scroll() {
        let log = NavLog::default();

        let mut dom = VirtualDom::new_with_props(navigate_with_open_menu, log.clone());
        dom.rebuild_in_place();

        assert_eq!(*log.borrow(), vec![(false, true), (true, false)]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;

    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn dom_sections_find_rendered_anchors() {
        let document = web_sys::window().unwrap().document().unwrap();
        let anchor = document.create_element("div").unwrap();
        anchor.set_id("pricing");
        document.body().unwrap().append_child(&anchor).unwrap();

        let view = DomSections::current().unwrap();
        assert!(view.scroll_into_view("pricing"));
        assert!(!view.scroll_into_view("nope"));

        anchor.remove();
        assert!(!view.scroll_into_view("pricing"));
    }
}
