pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Element id referenced by a same-page anchor href, if any.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
