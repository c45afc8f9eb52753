// src/tests/router_tests/pages_tests.rs

use crate::fragments::{FragmentError, FragmentSource};
use crate::tests::utils::{
    app_with_fragments, attr, body_string, count, get, get_page, request, select_all, send,
    test_app,
};
use http::Method;

#[test]
fn every_page_renders_with_header_and_footer() {
    let app = test_app();

    for uri in ["/", "/index.html", "/marketplace.html", "/tracking.html", "/about.html"] {
        let doc = get_page(&app, uri);
        assert_eq!(count(&doc, "#header-container nav.navbar"), 1, "{uri}");
        assert_eq!(count(&doc, "#footer-container footer"), 1, "{uri}");
    }
}

#[test]
fn marketplace_page_highlights_only_its_nav_link() {
    let app = test_app();
    let doc = get_page(&app, "/marketplace.html");

    assert_eq!(count(&doc, ".nav-links a.active"), 1);
    assert_eq!(count(&doc, "#nav-marketplace.active"), 1);
}

#[test]
fn root_and_unknown_paths_highlight_home() {
    let app = test_app();

    let doc = get_page(&app, "/");
    assert_eq!(select_all(&doc, ".nav-links a.active"), vec!["Home"]);

    let doc = get_page(&app, "/index.html?modal=nope");
    assert_eq!(select_all(&doc, ".nav-links a.active"), vec!["Home"]);
}

#[test]
fn tracking_and_about_pages_highlight_their_links() {
    let app = test_app();
    assert_eq!(count(&get_page(&app, "/tracking.html"), "#nav-tracking.active"), 1);
    assert_eq!(count(&get_page(&app, "/about.html"), "#nav-about.active"), 1);
}

#[test]
fn home_page_renders_stats_with_counter_targets() {
    let app = test_app();
    let doc = get_page(&app, "/");

    assert_eq!(count(&doc, ".stat-number[data-target]"), 4);
    assert_eq!(attr(&doc, ".stat-number", "data-target").as_deref(), Some("12500"));
    assert_eq!(select_all(&doc, ".stat-number")[0], "12,500");
    assert_eq!(count(&doc, ".feature-card"), 4);
    assert_eq!(count(&doc, ".featured .product-card"), 3);
    assert_eq!(attr(&doc, "#learnMoreBtn", "href").as_deref(), Some("#how-it-works"));
    assert_eq!(count(&doc, "#how-it-works"), 1);
}

#[test]
fn pages_boot_the_effects_bundle() {
    let app = test_app();
    let mut resp = get(&app, "/about.html");
    let body = body_string(&mut resp);
    assert!(body.contains("/static/pkg/farmlink_effects.js"));
}

#[test]
fn unknown_path_is_404() {
    let app = test_app();
    let mut resp = get(&app, "/pricing.html");
    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Not Found"));
}

#[test]
fn non_get_is_405() {
    let app = test_app();
    let resp = send(&app, request(Method::POST, "/marketplace.html"));
    assert_eq!(resp.status(), 405);
}

#[test]
fn raw_fragments_are_served_verbatim() {
    let app = test_app();

    let mut resp = get(&app, "/header.html");
    assert_eq!(resp.status(), 200);
    let header = body_string(&mut resp);
    assert!(header.starts_with("<nav class=\"navbar\">"));
    // no highlighting on the raw fragment
    assert!(!header.contains("active"));

    let mut resp = get(&app, "/footer.html");
    assert!(body_string(&mut resp).contains("FarmLink. All rights reserved."));
}

struct HeaderOnly;

impl FragmentSource for HeaderOnly {
    fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        match path {
            "header.html" => Ok(r#"<ul class="nav-links"><li><a id="nav-about">About</a></li></ul>"#.into()),
            other => Err(FragmentError::Unknown(other.into())),
        }
    }
}

#[test]
fn missing_fragment_leaves_its_container_empty() {
    let app = app_with_fragments(Box::new(HeaderOnly));
    let doc = get_page(&app, "/about.html");

    assert_eq!(count(&doc, "#footer-container"), 1);
    assert_eq!(count(&doc, "#footer-container *"), 0);
    assert_eq!(count(&doc, "#nav-about.active"), 1);

    let resp = get(&app, "/footer.html");
    assert_eq!(resp.status(), 404);
}
