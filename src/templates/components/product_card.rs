use crate::catalog::Product;
use maud::{html, Markup};

pub fn product_card(product: &Product, contact_href: &str) -> Markup {
    html! {
        div class="product-card" data-category=(product.category.as_str()) data-id=(product.id) {
            div class="product-image" { (product.icon) }
            div class="product-info" {
                div class="product-header" {
                    h3 class="product-name" { (product.name) }
                    span class="product-badge" { (product.badge) }
                }
                div class="product-location" { "📍 " (product.location) }
                div class="product-details" {
                    div {
                        span class="product-price" { "₹" (product.price) }
                        span class="product-unit" { (product.unit) }
                    }
                    a class="product-btn" href=(contact_href) { "Contact" }
                }
            }
        }
    }
}
