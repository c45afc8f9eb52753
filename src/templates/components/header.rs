use maud::{html, Markup};

/// Shared site header. Links are relative and modal buttons use `?modal=`,
/// so the same markup works on every page; page composition then folds the
/// current page state into the modal links.
pub fn header_fragment() -> Markup {
    html! {
        nav class="navbar" {
            div class="nav-container" {
                a href="index.html" class="logo" {
                    span class="logo-icon" { "🌱" }
                    span class="logo-text" { "FarmLink" }
                }
                ul class="nav-links" {
                    li { a href="index.html" class="nav-link" id="nav-home" { "Home" } }
                    li { a href="marketplace.html" class="nav-link" id="nav-marketplace" { "Marketplace" } }
                    li { a href="tracking.html" class="nav-link" id="nav-tracking" { "Track Shipment" } }
                    li { a href="about.html" class="nav-link" id="nav-about" { "About" } }
                }
                div class="nav-actions" {
                    a href="?modal=login" class="btn-secondary" id="loginBtn" { "Login" }
                    a href="?modal=signup" class="btn-primary" id="signupBtn" { "Sign Up" }
                }
                a href="?modal=menu" class="mobile-menu-btn" id="mobileMenuBtn" aria-label="Menu" { "☰" }
            }
        }
    }
}
