// templates/pages/home.rs

use crate::catalog::{recompute, Catalog, ViewState};
use crate::modal::open_href;
use crate::query::Params;
use crate::templates::components::{product_card, section_header};
use farmlink_effects::format_thousands;
use maud::{html, Markup};

const STATS: [(u64, &str); 4] = [
    (12_500, "Registered Farmers"),
    (3_200, "Active Buyers"),
    (48_000, "Tonnes Traded"),
    (250, "Cities Served"),
];

const FEATURES: [(&str, &str, &str); 4] = [
    ("🤝", "Direct Connections", "Sell straight to buyers with no middlemen taking a cut."),
    ("💰", "Fair Prices", "Transparent market rates so farmers earn what their produce is worth."),
    ("🚚", "Live Tracking", "Follow every shipment from the farm gate to the buyer's door."),
    ("✅", "Verified Quality", "Badges for organic and premium produce, checked at pickup."),
];

const STEPS: [(&str, &str); 3] = [
    ("List your produce", "Add what you grow, your location and your price."),
    ("Connect with buyers", "Buyers browse the marketplace and contact you directly."),
    ("Ship and get paid", "Hand over the order and track it until it is delivered."),
];

const TESTIMONIALS: [(&str, &str, &str); 2] = [
    (
        "I now sell my tomatoes at a fair price without waiting for an agent.",
        "Gurpreet Singh",
        "Farmer, Punjab",
    ),
    (
        "We source rice and dairy for three restaurants straight from the farms.",
        "Anita Desai",
        "Buyer, Mumbai",
    ),
];

const FEATURED_COUNT: usize = 3;

pub fn home_page(catalog: &Catalog, path: &str, params: &Params) -> Markup {
    let featured = recompute(catalog, &ViewState::default());

    html! {
        section class="hero" id="home" {
            div class="hero-content" {
                h1 class="hero-title" { "Fresh Produce, " span class="highlight" { "Direct from Farmers" } }
                p class="hero-subtitle" {
                    "FarmLink connects farmers and buyers across India with fair prices and live shipment tracking."
                }
                div class="hero-buttons" {
                    a class="btn-primary btn-large" id="getStartedHero" href=(open_href(path, params, "get-started", None)) {
                        "Get Started"
                    }
                    a class="btn-secondary btn-large" id="learnMoreBtn" href="#how-it-works" { "Learn More" }
                }
            }
        }

        section class="stats" {
            div class="stats-grid" {
                @for (target, label) in STATS {
                    div class="stat" {
                        span class="stat-number" data-target=(target) { (format_thousands(target)) }
                        span class="stat-label" { (label) }
                    }
                }
            }
        }

        section class="features" id="features" {
            (section_header("Why FarmLink", "Everything you need to trade produce with confidence."))
            div class="features-grid" {
                @for (icon, title, text) in FEATURES {
                    div class="feature-card" {
                        div class="feature-icon" { (icon) }
                        h3 { (title) }
                        p { (text) }
                    }
                }
            }
        }

        section class="how-it-works" id="how-it-works" {
            (section_header("How It Works", "Three steps from harvest to delivery."))
            div class="steps" {
                @for (i, (title, text)) in STEPS.iter().enumerate() {
                    div class="step" {
                        div class="step-number" { (i + 1) }
                        h3 { (title) }
                        p { (text) }
                    }
                }
            }
        }

        section class="featured" {
            (section_header("Fresh on the Marketplace", "A taste of what farmers are selling today."))
            div class="marketplace-grid" {
                @for product in featured.iter().take(FEATURED_COUNT) {
                    (product_card(product, &open_href(path, params, "contact", Some(product.name.as_str()))))
                }
            }
            p class="center" { a class="btn-secondary" href="marketplace.html" { "Browse all produce" } }
        }

        section class="testimonials" {
            (section_header("What People Say", "Farmers and buyers already trading on FarmLink."))
            div class="testimonials-grid" {
                @for (quote, name, role) in TESTIMONIALS {
                    div class="testimonial-card" {
                        p class="testimonial-text" { "“" (quote) "”" }
                        div class="testimonial-author" {
                            strong { (name) }
                            span { (role) }
                        }
                    }
                }
            }
        }

        (cta(path, params))
    }
}

pub fn cta(path: &str, params: &Params) -> Markup {
    html! {
        section class="cta" {
            h2 { "Ready to grow with FarmLink?" }
            div class="cta-buttons" {
                a class="btn-primary btn-large" id="ctaSignup" href=(open_href(path, params, "create-account", None)) { "Create Account" }
                a class="btn-secondary btn-large" id="ctaDemo" href=(open_href(path, params, "demo", None)) { "Schedule Demo" }
                a class="btn-secondary btn-large" id="ctaContact" href=(open_href(path, params, "contact-us", None)) { "Contact Us" }
            }
        }
    }
}
