use crate::templates::layouts::app::app_layout;
use maud::{html, Markup};

/// Full error page for a failed request.
pub fn error_page(status: u16, message: &str) -> Markup {
    app_layout(
        &format!("Error {status}"),
        None,
        html! {
            main class="container" {
                h1 { "Error " (status) }
                p class="muted" { (message) }
                p { a href="/" { "← Back to listings" } }
            }
        },
    )
}
