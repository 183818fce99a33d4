use dioxus::prelude::*;

use crate::common::{
    navigator::Section,
    toast::{Notice, Notifier, Toaster},
};
use crate::config::SiteConfig;

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const LOGIN_STUB: &str = "Login functionality would be implemented with backend integration";

// LoginForm
//
// the two controlled inputs.  submitting never clears them and never talks to
// a server; the only outcome is a notice
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    // whitespace counts as filled in, only the empty string is missing
    pub fn validate(&self) -> Notice {
        if self.email.is_empty() || self.password.is_empty() {
            Notice::destructive("Error", MISSING_FIELDS)
        } else {
            Notice::info("Login", LOGIN_STUB)
        }
    }

    pub fn submit<N>(&self, notifier: &N)
    where
        N: Notifier + ?Sized,
    {
        notifier.notify(self.validate());
    }
}

#[component]
pub fn LoginSection() -> Element {
    let config = use_context::<SiteConfig>();
    let toaster = Toaster {
        duration_ms: config.toast_duration_ms,
    };

    let mut form = use_signal(LoginForm::default);

    rsx! {
        section { id: Section::Login.id(), class: "login-section",
            div { class: "container container-narrow",
                div { class: "card login-card",
                    div { class: "section-heading",
                        h2 { class: "section-title", "Member Login" }
                        p { class: "section-subtitle", "Access your account to manage your planners" }
                    }
                    form {
                        class: "login-form",
                        onsubmit: move |event| {
                            event.prevent_default();
                            form.read().submit(&toaster);
                        },
                        div { class: "form-field",
                            label { class: "form-label", r#for: "email", "Email Address" }
                            input {
                                class: "form-input",
                                id: "email",
                                r#type: "email",
                                required: true,
                                placeholder: "Enter your email",
                                value: "{form.read().email}",
                                oninput: move |event| form.write().email = event.value(),
                            }
                        }
                        div { class: "form-field",
                            label { class: "form-label", r#for: "password", "Password" }
                            input {
                                class: "form-input",
                                id: "password",
                                r#type: "password",
                                required: true,
                                placeholder: "Enter your password",
                                value: "{form.read().password}",
                                oninput: move |event| form.write().password = event.value(),
                            }
                        }
                        button { class: "btn btn-primary btn-block", r#type: "submit", "Login" }
                    }
                    p { class: "login-signup",
                        "Don't have an account? "
                        a { href: "#", "Sign Up" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    use crate::common::toast::Variant;

    #[derive(Default)]
    struct Recorder {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for Recorder {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }

    #[test]
    fn empty_email_is_an_error() {
        for password in ["", "x", "hunter2"] {
            let recorder = Recorder::default();
            form("", password).submit(&recorder);

            let notices = recorder.notices.borrow();
            assert_eq!(notices.len(), 1);
            assert_eq!(notices[0].title, "Error");
            assert_eq!(notices[0].description, MISSING_FIELDS);
            assert_eq!(notices[0].variant, Variant::Destructive);
        }
    }

    #[test]
    fn empty_password_is_an_error() {
        let notice = form("a@b.com", "").validate();

        assert_eq!(notice, Notice::destructive("Error", MISSING_FIELDS));
    }

    #[test]
    fn filled_form_gets_the_stub() {
        let recorder = Recorder::default();
        let login = form("a@b.com", "x");

        login.submit(&recorder);

        let notices = recorder.notices.borrow();
        assert_eq!(*notices, vec![Notice::info("Login", LOGIN_STUB)]);
        assert_eq!(notices[0].variant, Variant::Default);
    }

    #[test]
    fn whitespace_counts_as_filled() {
        assert_eq!(form(" ", " ").validate().title, "Login");
    }
}
