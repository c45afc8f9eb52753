use crate::catalog::{Catalog, Shipment};
use crate::query::href;
use crate::tracking::{placeholder, TrackingOutcome, NOT_FOUND_HINT};
use crate::templates::components::section_header;
use maud::{html, Markup};

pub fn tracking_page(catalog: &Catalog, path: &str, input: &str, outcome: &TrackingOutcome) -> Markup {
    html! {
        section class="page-hero" {
            h1 { "Track Your Shipment" }
            p class="hero-subtitle" { "Follow your produce from the farm to your door." }
        }

        section class="tracking" id="tracking" {
            (section_header("Shipment Lookup", "Enter the tracking ID from your order confirmation."))

            form class="tracking-form" method="get" action=(path) {
                label class="sr-only" for="trackingInput" { "Tracking ID" }
                input
                    type="text"
                    id="trackingInput"
                    name="id"
                    value=(input)
                    placeholder=(placeholder(catalog))
                    autocomplete="off";
                button type="submit" class="btn-primary" id="trackBtn" { "Track" }
            }

            div class="sample-ids" {
                span { "Sample IDs: " }
                @for id in catalog.tracking_ids() {
                    a class="sample-id-btn" data-id=(id) href=(href(path, [("id", id)])) { (id) }
                }
            }

            (tracking_result(outcome))
        }
    }
}

/// The `#trackingResult` panel; absent until something has been looked up.
pub fn tracking_result(outcome: &TrackingOutcome) -> Markup {
    html! {
        @match outcome {
            TrackingOutcome::Empty => {},
            TrackingOutcome::NotFound { id } => {
                div class="tracking-result" id="trackingResult" data-id=(id) {
                    div class="tracking-status not-found" {
                        div class="status-icon" { "❌" }
                        div class="status-text" {
                            h4 { "Tracking ID Not Found" }
                            p { (NOT_FOUND_HINT) }
                        }
                    }
                }
            },
            TrackingOutcome::Found { id, shipment } => {
                div class="tracking-result" id="trackingResult" data-id=(id) {
                    (status_summary(shipment))
                    (timeline(shipment))
                }
            },
        }
    }
}

fn status_summary(shipment: &Shipment) -> Markup {
    html! {
        div class="tracking-status" {
            div class="status-icon" { "📦" }
            div class="status-text" {
                h4 { (shipment.status) }
                p { (shipment.product) " from " (shipment.from) " to " (shipment.to) }
                p { strong { "Estimated: " (shipment.estimated) } }
            }
        }
    }
}

fn timeline(shipment: &Shipment) -> Markup {
    html! {
        p class="timeline-progress" {
            (shipment.reached_steps()) " of " (shipment.timeline.len()) " steps complete"
        }
        div class="tracking-timeline" {
            @for step in &shipment.timeline {
                div class="timeline-item" {
                    div.timeline-dot.active[step.reached] {}
                    div class="timeline-content" {
                        h5 { (step.label) }
                        p { (step.time) }
                    }
                }
            }
        }
    }
}
