use maud::{html, Markup};

pub mod error;
pub mod footer;
pub mod header;
pub mod modal;
pub mod product_card;

pub use error::html_error_response;
pub use footer::footer_fragment;
pub use header::header_fragment;
pub use modal::present;
pub use product_card::product_card;

pub fn section_header(title: &str, subtitle: &str) -> Markup {
    html! {
        div class="section-header" {
            h2 class="section-title" { (title) }
            p class="section-subtitle" { (subtitle) }
        }
    }
}
