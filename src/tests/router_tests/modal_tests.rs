// src/tests/router_tests/modal_tests.rs

use crate::tests::utils::{attr, count, get_page, select_all, test_app};

#[test]
fn modal_param_renders_a_single_dialog() {
    let app = test_app();
    let doc = get_page(&app, "/?modal=login");

    assert_eq!(count(&doc, ".modal-overlay"), 1);
    assert_eq!(select_all(&doc, ".modal h3"), vec!["Login"]);
    assert_eq!(
        select_all(&doc, ".modal p"),
        vec!["Login functionality would be implemented here."]
    );
}

#[test]
fn repeated_modal_params_do_not_stack() {
    let app = test_app();
    let doc = get_page(&app, "/about.html?modal=signup&modal=demo");

    assert_eq!(count(&doc, ".modal-overlay"), 1);
    assert_eq!(select_all(&doc, ".modal h3"), vec!["Schedule Demo"]);
}

#[test]
fn backdrop_outside_dialog_dismisses_and_dialog_does_not() {
    let app = test_app();
    let doc = get_page(
        &app,
        "/marketplace.html?filter=dairy&modal=contact&product=Fresh+Milk",
    );

    // outside the dialog: full-viewport backdrop pointing at the page without the modal
    assert_eq!(
        attr(&doc, ".modal-overlay > a.modal-backdrop", "href").as_deref(),
        Some("/marketplace.html?filter=dairy")
    );
    // the dialog is a sibling, not inside the dismissing link
    assert_eq!(count(&doc, ".modal-backdrop .modal"), 0);
    assert_eq!(count(&doc, ".modal-overlay > .modal"), 1);
    // only the explicit button inside the dialog dismisses
    assert_eq!(count(&doc, ".modal a"), 1);
    assert_eq!(
        attr(&doc, ".modal a.modal-dismiss", "href").as_deref(),
        Some("/marketplace.html?filter=dairy")
    );
    assert!(select_all(&doc, ".modal p")[0].starts_with("You're interested in Fresh Milk."));
}

#[test]
fn unknown_modal_renders_nothing() {
    let app = test_app();
    let doc = get_page(&app, "/?modal=nope");
    assert_eq!(count(&doc, ".modal-overlay"), 0);
}

#[test]
fn cta_buttons_open_modals_on_the_current_page() {
    let app = test_app();
    let doc = get_page(&app, "/about.html");

    assert_eq!(
        attr(&doc, "#ctaDemo", "href").as_deref(),
        Some("/about.html?modal=demo")
    );
    assert_eq!(
        attr(&doc, "#signupBtn", "href").as_deref(),
        Some("/about.html?modal=signup")
    );
}

#[test]
fn header_modal_links_keep_marketplace_state() {
    let app = test_app();
    let doc = get_page(&app, "/marketplace.html?filter=fruits&q=app&sort=price-high");

    assert_eq!(
        attr(&doc, "#loginBtn", "href").as_deref(),
        Some("/marketplace.html?filter=fruits&q=app&sort=price-high&modal=login")
    );

    let opened = get_page(&app, "/marketplace.html?filter=fruits&q=app&sort=price-high&modal=login");
    assert_eq!(
        attr(&opened, ".modal-dismiss", "href").as_deref(),
        Some("/marketplace.html?filter=fruits&q=app&sort=price-high")
    );
}
