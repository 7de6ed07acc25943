//! Row selection keyed by entity id.
//!
//! Selection lives on ids, not row indexes, so checked rows stay checked
//! across page changes and filter changes. A route change is the only thing
//! that clears it wholesale.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check or uncheck one row
    pub fn toggle(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// Add a batch of ids, keeping what is already selected
    pub fn extend<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.ids.extend(ids);
    }

    /// Drop the named ids, keeping the rest
    pub fn remove_many(&mut self, ids: &[String]) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected ids in a stable order, for requests and tests
    pub fn ids(&self) -> Vec<String> {
        let mut out: Vec<String> = self.ids.iter().cloned().collect();
        out.sort();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_count() {
        let mut sel = Selection::new();
        sel.toggle("a", true);
        sel.toggle("b", true);
        assert_eq!(sel.count(), 2);
        assert!(sel.contains("a"));

        sel.toggle("a", false);
        assert_eq!(sel.count(), 1);
        assert!(!sel.contains("a"));
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut sel = Selection::new();
        sel.toggle("a", true);
        sel.toggle("a", true);
        assert_eq!(sel.count(), 1);
        sel.toggle("missing", false);
        assert_eq!(sel.count(), 1);
    }

    #[test]
    fn test_extend_keeps_existing() {
        let mut sel = Selection::new();
        sel.toggle("a", true);
        sel.extend(["b".to_string(), "c".to_string()]);
        assert_eq!(sel.ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_many_leaves_the_rest() {
        let mut sel = Selection::new();
        sel.extend(["a".to_string(), "b".to_string(), "c".to_string()]);
        sel.remove_many(&["a".to_string(), "c".to_string()]);
        assert_eq!(sel.ids(), vec!["b"]);
    }

    #[test]
    fn test_clear() {
        let mut sel = Selection::new();
        sel.extend(["a".to_string(), "b".to_string()]);
        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn test_ids_are_sorted() {
        let mut sel = Selection::new();
        sel.extend(["c".to_string(), "a".to_string(), "b".to_string()]);
        assert_eq!(sel.ids(), vec!["a", "b", "c"]);
    }
}
