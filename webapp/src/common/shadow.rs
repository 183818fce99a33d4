use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, error};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::Window;

// fixed, not part of SiteConfig
pub const HEADER_SHADOW_THRESHOLD: f64 = 50.0;

pub const HEADER_SHADOW_CLASS: &str = "shadow-md";

// strictly greater than: sitting exactly on the threshold is still flat
pub fn header_has_shadow(scroll_y: f64) -> bool {
    scroll_y > HEADER_SHADOW_THRESHOLD
}

// HeaderShadow
//
// the derived flag, recomputed on each scroll event.  observe() reports
// whether it flipped so the caller only writes the signal on a change
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderShadow {
    shadowed: bool,
}

impl HeaderShadow {
    pub fn observe(&mut self, scroll_y: f64) -> bool {
        let shadowed = header_has_shadow(scroll_y);
        let changed = shadowed != self.shadowed;
        self.shadowed = shadowed;
        changed
    }

    pub fn is_shadowed(&self) -> bool {
        self.shadowed
    }

    pub fn header_class(&self, base: &str) -> String {
        if self.is_shadowed() {
            format!("{base} {HEADER_SHADOW_CLASS}")
        } else {
            base.to_owned()
        }
    }
}

// ScrollListener
//
// holds a window "scroll" listener for as long as it lives; dropping it
// removes the listener, so the callback can never outlive its view
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    pub fn attach<F>(on_scroll: F) -> anyhow::Result<Self>
    where
        F: Fn(f64) + 'static,
    {
        let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window"))?;

        let callback = Closure::<dyn Fn()>::new(move || {
            if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                on_scroll(scroll_y);
            }
        });

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|err| anyhow::Error::msg(format!("failed to add scroll listener: {err:?}")))?;

        debug!("scroll listener attached");
        Ok(ScrollListener { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        match self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => debug!("scroll listener detached"),
            Err(err) => error!("failed to remove scroll listener: {err:?}"),
        }
    }
}

// use_header_shadow
//
// the listener sits in a hook slot, which dioxus drops along with the scope,
// so unmounting the header detaches it
pub fn use_header_shadow() -> Signal<HeaderShadow> {
    let shadow = use_signal(HeaderShadow::default);

    use_hook(move || {
        let attached = ScrollListener::attach(move |scroll_y| {
            let mut shadow = shadow;
            let mut next = *shadow.peek();
            if next.observe(scroll_y) {
                shadow.set(next);
            }
        });

        match attached {
            Ok(listener) => Some(Rc::new(listener)),
            Err(err) => {
                error!("header shadow disabled: {err}");
                None
            }
        }
    });

    shadow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!header_has_shadow(0.0));
        assert!(!header_has_shadow(50.0));
        assert!(header_has_shadow(50.5));
        assert!(header_has_shadow(51.0));
    }

    #[test]
    fn scroll_down_then_back_up() {
        let mut shadow = HeaderShadow::default();
        assert_eq!(shadow.header_class("site-header"), "site-header");

        assert!(shadow.observe(51.0));
        assert!(shadow.is_shadowed());
        assert_eq!(shadow.header_class("site-header"), "site-header shadow-md");

        assert!(shadow.observe(0.0));
        assert!(!shadow.is_shadowed());
        assert_eq!(shadow.header_class("site-header"), "site-header");
    }

    #[test]
    fn observe_reports_only_flips() {
        let mut shadow = HeaderShadow::default();

        assert!(!shadow.observe(10.0));
        assert!(!shadow.observe(50.0));
        assert!(shadow.observe(120.0));
        assert!(!shadow.observe(400.0));
        assert!(shadow.observe(50.0));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;

    use std::cell::Cell;

    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch_scroll() {
        let window = web_sys::window().unwrap();
        let event = Event::new("scroll").unwrap();
        window.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn listener_runs_until_dropped() {
        let calls = Rc::new(Cell::new(0u32));

        let listener = {
            let calls = calls.clone();
            ScrollListener::attach(move |_| calls.set(calls.get() + 1)).unwrap()
        };

        dispatch_scroll();
        assert_eq!(calls.get(), 1);

        drop(listener);

        dispatch_scroll();
        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    fn listener_sees_the_scroll_offset() {
        let last = Rc::new(Cell::new(f64::NAN));

        let _listener = {
            let last = last.clone();
            ScrollListener::attach(move |scroll_y| last.set(scroll_y)).unwrap()
        };

        dispatch_scroll();

        let expected = web_sys::window().unwrap().scroll_y().unwrap();
        assert_eq!(last.get(), expected);
    }
}
