// src/tests/router_tests/tracking_tests.rs

use crate::tests::utils::{attr, count, get_page, select_all, test_app};

#[test]
fn in_transit_shipment_shows_status_and_partial_timeline() {
    let app = test_app();
    let doc = get_page(&app, "/tracking.html?id=FL-2024-8523");

    assert_eq!(select_all(&doc, "#trackingResult .status-text h4"), vec!["In Transit"]);
    let lines = select_all(&doc, "#trackingResult .status-text p");
    assert_eq!(lines[0], "Fresh Tomatoes from Punjab to Delhi");
    assert_eq!(lines[1], "Estimated: 2 hours");

    assert_eq!(count(&doc, ".timeline-item"), 5);
    assert_eq!(count(&doc, ".timeline-dot.active"), 3);
    assert_eq!(select_all(&doc, ".timeline-progress"), vec!["3 of 5 steps complete"]);
    assert_eq!(
        select_all(&doc, ".timeline-content h5"),
        vec!["Order Placed", "Picked Up", "In Transit", "Out for Delivery", "Delivered"]
    );
}

#[test]
fn delivered_shipment_has_every_step_reached() {
    let app = test_app();
    let doc = get_page(&app, "/tracking.html?id=FL-2024-7621");

    assert_eq!(select_all(&doc, "#trackingResult .status-text h4"), vec!["Delivered"]);
    assert_eq!(count(&doc, ".timeline-dot"), 5);
    assert_eq!(count(&doc, ".timeline-dot.active"), 5);
}

#[test]
fn unknown_id_renders_not_found_panel() {
    let app = test_app();
    let doc = get_page(&app, "/tracking.html?id=unknown-id");

    assert_eq!(
        select_all(&doc, "#trackingResult h4"),
        vec!["Tracking ID Not Found"]
    );
    assert_eq!(count(&doc, ".timeline-item"), 0);
    assert_eq!(attr(&doc, "#trackingInput", "value").as_deref(), Some("unknown-id"));
}

#[test]
fn lookup_is_trimmed_and_case_sensitive() {
    let app = test_app();

    let doc = get_page(&app, "/tracking.html?id=+FL-2024-9142+");
    assert_eq!(select_all(&doc, "#trackingResult .status-text h4"), vec!["Processing"]);

    let doc = get_page(&app, "/tracking.html?id=fl-2024-9142");
    assert_eq!(select_all(&doc, "#trackingResult h4"), vec!["Tracking ID Not Found"]);
}

#[test]
fn no_id_renders_no_panel() {
    let app = test_app();
    let doc = get_page(&app, "/tracking.html");

    assert_eq!(count(&doc, "#trackingResult"), 0);
    assert_eq!(
        attr(&doc, "#trackingInput", "placeholder").as_deref(),
        Some("Try: FL-2024-8523, FL-2024-7621, or FL-2024-9142")
    );
}

#[test]
fn sample_id_buttons_link_to_lookups() {
    let app = test_app();
    let doc = get_page(&app, "/tracking.html");

    assert_eq!(
        select_all(&doc, ".sample-id-btn"),
        vec!["FL-2024-8523", "FL-2024-7621", "FL-2024-9142"]
    );
    assert_eq!(
        attr(&doc, ".sample-id-btn[data-id=FL-2024-8523]", "href").as_deref(),
        Some("/tracking.html?id=FL-2024-8523")
    );
}
