// src/tests/router_tests/static_tests.rs

use crate::app::App;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::fragments::BuiltinFragments;
use crate::tests::utils::{body_string, get, request, send, test_app};
use http::Method;

#[test]
fn stylesheet_is_served_with_etag() {
    let app = test_app();
    let mut resp = get(&app, "/static/main.css");

    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/css"));
    assert!(resp.headers().contains_key("ETag"));
    assert!(body_string(&mut resp).contains(".navbar"));
}

#[test]
fn matching_if_none_match_is_304() {
    let app = test_app();
    let etag = get(&app, "/static/main.css")
        .headers()
        .get("ETag")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let mut req = request(Method::GET, "/static/main.css");
    req.headers_mut()
        .insert("If-None-Match", etag.parse().unwrap());
    let mut resp = send(&app, req);

    assert_eq!(resp.status(), 304);
    assert!(body_string(&mut resp).is_empty());
}

fn app_with_pkg(dir: &std::path::Path) -> App {
    let config = Config {
        pkg_dir: dir.to_path_buf(),
        ..Config::default()
    };
    App::new(config, Catalog::builtin(), Box::new(BuiltinFragments))
}

#[test]
fn wasm_bundle_files_are_served_from_pkg_dir() {
    let dir = std::env::temp_dir().join(format!("farmlink_pkg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("farmlink_effects_bg.wasm"), b"\0asm").unwrap();

    let app = app_with_pkg(&dir);

    let resp = get(&app, "/static/pkg/farmlink_effects_bg.wasm");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "application/wasm");

    assert_eq!(get(&app, "/static/pkg/missing.js").status(), 404);
    assert_eq!(get(&app, "/static/pkg/../Cargo.toml").status(), 404);
    assert_eq!(get(&app, "/static/pkg/.hidden").status(), 404);

    let _ = std::fs::remove_dir_all(&dir);
}
