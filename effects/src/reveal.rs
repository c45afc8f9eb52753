use std::collections::HashSet;
use std::hash::Hash;

pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Negative bottom margin so elements reveal slightly before fully entering.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_SELECTOR: &str = ".feature-card, .product-card, .testimonial-card, .step";
pub const HIDDEN_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";

/// One-shot bookkeeping for intersection-driven effects.
///
/// An element is observed once and fires on its first intersection only;
/// after that it is forgotten, so re-entering the viewport does nothing.
#[derive(Debug)]
pub struct RevealTracker<K> {
    pending: HashSet<K>,
}

impl<K: Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            pending: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, key: K) {
        self.pending.insert(key);
    }

    /// Returns `true` exactly when this entry should trigger the effect.
    pub fn on_intersect(&mut self, key: &K, is_intersecting: bool) -> bool {
        is_intersecting && self.pending.remove(key)
    }

    pub fn is_observing(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
