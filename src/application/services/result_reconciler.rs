use std::collections::HashSet;

use crate::domain::Component;

/// Length of the normalized text prefix two components are compared on.
pub const DEDUP_PREFIX_CHARS: usize = 200;

/// Merges per-chunk component lists, keeping the first component seen for
/// each normalized text prefix.
///
/// Distinct components whose first 200 characters agree (ignoring case and
/// surrounding whitespace) collapse into one as well. Known false positive.
#[derive(Debug, Default)]
pub struct ResultReconciler {
    seen: HashSet<String>,
    components: Vec<Component>,
}

impl ResultReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one chunk's components in order; returns how many were kept.
    pub fn absorb<I>(&mut self, components: I) -> usize
    where
        I: IntoIterator<Item = Component>,
    {
        let before = self.components.len();
        for component in components {
            if self.seen.insert(dedup_key(&component.text)) {
                self.components.push(component);
            }
        }
        self.components.len() - before
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }
}

pub fn dedup_key(text: &str) -> String {
    text.to_lowercase()
        .trim()
        .chars()
        .take(DEDUP_PREFIX_CHARS)
        .collect()
}
