use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::debug;

use crate::common::style;

pub static TOASTS: GlobalSignal<ToastQueue> = Signal::global(ToastQueue::default);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

// Notice
//
// the payload handed to the notification surface; mirrors the usual
// {title, description, variant?} toast shape
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notice {
    pub fn info(title: &str, description: &str) -> Self {
        Notice {
            title: title.to_owned(),
            description: description.to_owned(),
            variant: Variant::Default,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Notice {
            title: title.to_owned(),
            description: description.to_owned(),
            variant: Variant::Destructive,
        }
    }
}

// anything that can surface a notice to the user
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

pub type ToastId = u64;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub notice: Notice,
}

// ToastQueue
//
// ordered oldest first.  pushing past the limit evicts from the front, so the
// newest notice is always visible
#[derive(Clone, Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: ToastId,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        ToastQueue::with_limit(1)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        ToastQueue {
            toasts: Vec::new(),
            next_id: 0,
            limit: limit.max(1),
        }
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.evict();
    }

    pub fn push(&mut self, notice: Notice) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast { id, notice });
        self.evict();

        id
    }

    // returns false if the toast was already gone, e.g. closed by hand before
    // its timer fired
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn evict(&mut self) {
        if self.toasts.len() > self.limit {
            let excess = self.toasts.len() - self.limit;
            self.toasts.drain(..excess);
        }
    }
}

// Toaster
//
// the browser notifier: queues the notice on the global signal and arms a
// timer to take it down again
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Toaster {
    pub duration_ms: u32,
}

impl Notifier for Toaster {
    fn notify(&self, notice: Notice) {
        let id = TOASTS.with_mut(|q| q.push(notice));
        debug!(id, "toast pushed");

        Timeout::new(self.duration_ms, move || {
            if TOASTS.with_mut(|q| q.dismiss(id)) {
                debug!(id, "toast expired");
            }
        })
        .forget();
    }
}

#[component]
pub fn ToastStack() -> Element {
    if TOASTS.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style { "{style::TOAST}" }
            ol { class: "toast-viewport",
                for toast in TOASTS.read().iter().cloned() {
                    li {
                        key: "{toast.id}",
                        class: match toast.notice.variant {
                            Variant::Default => "toast",
                            Variant::Destructive => "toast toast-destructive",
                        },
                        role: "status",
                        div { class: "toast-body",
                            div { class: "toast-title", "{toast.notice.title}" }
                            div { class: "toast-description", "{toast.notice.description}" }
                        }
                        button {
                            class: "toast-close",
                            r#type: "button",
                            aria_label: "Close",
                            onclick: move |_| {
                                TOASTS.with_mut(|q| q.dismiss(toast.id));
                            },
                            i { class: "fas fa-times" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut queue = ToastQueue::with_limit(3);

        let a = queue.push(Notice::info("a", "first"));
        let b = queue.push(Notice::info("b", "second"));

        assert!(b > a);
        assert_eq!(queue.iter().count(), 2);
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut queue = ToastQueue::with_limit(1);

        queue.push(Notice::destructive("Error", "Please fill in all fields"));
        let newest = queue.push(Notice::info("Login", "stub"));

        let visible: Vec<_> = queue.iter().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, newest);
        assert_eq!(visible[0].notice.title, "Login");
    }

    #[test]
    fn zero_limit_still_shows_one() {
        let mut queue = ToastQueue::with_limit(0);
        queue.push(Notice::info("a", "b"));

        assert_eq!(queue.iter().count(), 1);
    }

    #[test]
    fn shrinking_the_limit_evicts() {
        let mut queue = ToastQueue::with_limit(3);
        for n in 0..3 {
            queue.push(Notice::info("n", &n.to_string()));
        }

        queue.set_limit(2);

        let descriptions: Vec<_> = queue.iter().map(|t| t.notice.description.as_str()).collect();
        assert_eq!(descriptions, vec!["1", "2"]);
    }

    #[test]
    fn dismiss_unknown_id_is_a_no_op() {
        let mut queue = ToastQueue::with_limit(2);
        let id = queue.push(Notice::info("a", "b"));

        assert!(!queue.dismiss(id + 100));
        assert_eq!(queue.iter().count(), 1);

        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
        assert!(!queue.dismiss(id));
    }
}
