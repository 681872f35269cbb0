use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Basic HTML error page.
pub fn html_error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        None,
        html! {
            main class="container error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to dashboard" } }
            }
        },
    )
}
