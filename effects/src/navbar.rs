pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const NAVBAR_SHADOW: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";

/// Box shadow for the navbar at a given vertical scroll offset.
pub fn navbar_shadow(scroll_y: f64) -> Option<&'static str> {
    if scroll_y > 0.0 {
        Some(NAVBAR_SHADOW)
    } else {
        None
    }
}
