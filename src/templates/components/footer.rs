use chrono::{Datelike, Local};
use maud::{html, Markup};

pub fn footer_fragment() -> Markup {
    let year = Local::now().year();

    html! {
        footer class="footer" {
            div class="footer-container" {
                div class="footer-brand" {
                    a href="index.html" class="logo" {
                        span class="logo-icon" { "🌱" }
                        span class="logo-text" { "FarmLink" }
                    }
                    p { "Connecting farmers directly with buyers across India." }
                }
                div class="footer-links" {
                    h4 { "Platform" }
                    a href="marketplace.html" { "Marketplace" }
                    a href="tracking.html" { "Track Shipment" }
                    a href="about.html" { "About Us" }
                }
                div class="footer-links" {
                    h4 { "Support" }
                    a href="?modal=contact-us" { "Contact" }
                    a href="about.html#how-it-works" { "How it works" }
                }
            }
            p class="footer-bottom" { "© " (year) " FarmLink. All rights reserved." }
        }
    }
}
