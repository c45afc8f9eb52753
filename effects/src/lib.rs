//! Scroll and visual effects for the FarmLink pages.
//!
//! The modules here are plain Rust so the server can share constants and
//! formatting with the browser bundle. The `dom` module wires them to the
//! page and only exists on `wasm32`.

pub mod counter;
pub mod navbar;
pub mod reveal;
pub mod scroll;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use counter::{format_thousands, CounterAnimation};
pub use navbar::navbar_shadow;
pub use reveal::RevealTracker;
pub use scroll::anchor_target;
