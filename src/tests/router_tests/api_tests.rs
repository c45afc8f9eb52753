// src/tests/router_tests/api_tests.rs

use crate::tests::utils::{body_string, get, test_app};
use serde_json::Value;

#[test]
fn products_api_applies_view_state() {
    let app = test_app();
    let mut resp = get(&app, "/api/products?filter=vegetables&sort=price-high");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Fresh Tomatoes", "Carrots", "Fresh Spinach"]);
    assert_eq!(body[0]["category"], "vegetables");
}

#[test]
fn track_api_returns_shipment() {
    let app = test_app();
    let mut resp = get(&app, "/api/track?id=FL-2024-9142");
    assert_eq!(resp.status(), 200);

    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["id"], "FL-2024-9142");
    assert_eq!(body["status"], "Processing");
    assert_eq!(body["timeline"].as_array().unwrap().len(), 5);
    assert_eq!(body["timeline"][1]["reached"], true);
    assert_eq!(body["timeline"][2]["reached"], false);
}

#[test]
fn track_api_miss_is_json_404() {
    let app = test_app();
    let mut resp = get(&app, "/api/track?id=unknown-id");
    assert_eq!(resp.status(), 404);

    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["error"], "not found");
}

#[test]
fn track_api_requires_an_id() {
    let app = test_app();
    assert_eq!(get(&app, "/api/track").status(), 400);
    assert_eq!(get(&app, "/api/track?id=+").status(), 400);
}
