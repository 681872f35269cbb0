use maud::{html, Markup};

pub mod apartment_table;
pub mod entry_form;
pub mod error;
pub mod filter_form;
pub mod histograms;
pub mod map;

pub use error::html_error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn flash(message: &str) -> Markup {
    html! {
        div class="flash success" role="status" { (message) }
    }
}
