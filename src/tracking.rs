use crate::catalog::{Catalog, Shipment};

pub const NOT_FOUND_HINT: &str = "Please check the ID and try again. Example: FL-2024-8523";

#[derive(Debug, PartialEq, Eq)]
pub enum TrackingOutcome<'a> {
    /// Nothing was entered; no panel is shown.
    Empty,
    NotFound { id: String },
    Found { id: String, shipment: &'a Shipment },
}

/// Trims the input and looks it up exactly; no case or format normalization.
pub fn track<'a>(catalog: &'a Catalog, input: &str) -> TrackingOutcome<'a> {
    let id = input.trim();
    if id.is_empty() {
        return TrackingOutcome::Empty;
    }

    match catalog.shipment(id) {
        Some(shipment) => TrackingOutcome::Found {
            id: id.to_string(),
            shipment,
        },
        None => TrackingOutcome::NotFound { id: id.to_string() },
    }
}

/// "Try: A, B, or C" for the tracking input.
pub fn placeholder(catalog: &Catalog) -> String {
    let ids: Vec<&str> = catalog.tracking_ids().collect();
    let list = match ids.as_slice() {
        [] => return "Enter tracking ID".to_string(),
        [one] => one.to_string(),
        [first, second] => format!("{first} or {second}"),
        [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
    };
    format!("Try: {list}")
}
