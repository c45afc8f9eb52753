use crate::query::Params;
use crate::templates::components::section_header;
use crate::templates::pages::home::cta;
use maud::{html, Markup};

const VALUES: [(&str, &str, &str); 3] = [
    ("🌾", "Farmers First", "Growers set their own prices and keep the margin."),
    ("🔍", "Transparency", "Every listing shows where the produce comes from."),
    ("🌍", "Less Waste", "Shorter supply chains mean fresher food and less spoilage."),
];

pub fn about_page(path: &str, params: &Params) -> Markup {
    html! {
        section class="page-hero" id="about" {
            h1 { "About FarmLink" }
            p class="hero-subtitle" {
                "We started FarmLink to give small farmers a direct line to the people who buy their produce."
            }
        }

        section class="mission" {
            (section_header("Our Mission", "Fair trade for every harvest."))
            p {
                "Too much of what a farmer earns is lost to agents and long supply chains. "
                "FarmLink lists produce straight from the farm, lets buyers contact growers "
                "directly and tracks each shipment until it arrives."
            }
        }

        section class="values" {
            (section_header("What We Value", "The principles behind the platform."))
            div class="features-grid" {
                @for (icon, title, text) in VALUES {
                    div class="feature-card" {
                        div class="feature-icon" { (icon) }
                        h3 { (title) }
                        p { (text) }
                    }
                }
            }
        }

        section class="how-it-works" id="how-it-works" {
            (section_header("How It Works", "From listing to delivery."))
            div class="steps" {
                div class="step" { div class="step-number" { "1" } h3 { "List" } p { "Farmers post produce with price and location." } }
                div class="step" { div class="step-number" { "2" } h3 { "Connect" } p { "Buyers find it on the marketplace and get in touch." } }
                div class="step" { div class="step-number" { "3" } h3 { "Deliver" } p { "Shipments are tracked with a live timeline." } }
            }
            p class="center" { a href="#about" { "Back to top" } }
        }

        (cta(path, params))
    }
}
