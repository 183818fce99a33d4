use dioxus::prelude::*;

pub mod catalog;

mod feedback;
use feedback::Feedback;

mod features;
use features::Features;

mod footer;
use footer::Footer;

mod hero;
use hero::Hero;

mod login;
use login::LoginSection;

mod pricing;
use pricing::Pricing;

mod products;
use products::Products;

// the whole page, top to bottom.  sections carrying a Section id are scroll
// targets for the navigator; the features grid is not
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "landing",
            Hero {}
            Products {}
            Pricing {}
            Features {}
            Feedback {}
            LoginSection {}
            Footer {}
        }
    }
}
