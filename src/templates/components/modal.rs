use crate::modal::Modal;
use maud::{html, Markup};

/// Overlay with a centered dialog. The backdrop is a full-viewport link to
/// `dismiss_href` layered under the dialog, so a click outside the dialog
/// closes it and a click inside does not.
pub fn present(modal: &Modal, dismiss_href: &str) -> Markup {
    html! {
        div class="modal-overlay" role="presentation" {
            a class="modal-backdrop" href=(dismiss_href) aria-label="Close" {}
            div class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title" {
                h3 id="modal-title" { (modal.title) }
                p { (modal.message) }
                a class="modal-dismiss" href=(dismiss_href) { "Got it!" }
            }
        }
    }
}
