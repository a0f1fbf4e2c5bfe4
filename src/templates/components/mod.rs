use crate::auth::Toast;
use maud::{html, Markup};

pub mod bottom_nav;
pub mod error;
pub mod filter_form;
pub mod property_card;

pub use bottom_nav::{bottom_nav, NavTab};
pub use error::error_page;
pub use filter_form::filter_form;
pub use property_card::property_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            (body)
        }
    }
}

pub fn badge(label: &str) -> Markup {
    html! {
        span class="badge" { (label) }
    }
}

pub fn price_badge(price: u32) -> Markup {
    html! {
        span class="badge badge-accent" { (crate::domain::property::format_rand(price)) "/month" }
    }
}

pub fn toast(t: &Toast) -> Markup {
    html! {
        div.toast.toast-destructive[t.destructive] role="status" {
            strong { (t.title) }
            p style="margin: 0.25rem 0 0;" { (t.description) }
        }
    }
}
