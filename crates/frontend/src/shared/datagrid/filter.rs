//! Text filter debounce planning.
//!
//! Typing is debounced so the server sees one query per pause, not one per
//! keystroke. Clearing the box skips the wait entirely, and retyping the
//! already applied text is a no-op.

/// How long typing may pause before the filter is applied
pub const DEBOUNCE_MS: u32 = 1_000;

/// What to do with a keystroke in the filter box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPlan {
    /// Draft equals what is already applied, do nothing
    Ignore,
    /// Apply the new value right away
    ApplyNow(String),
    /// Wait out the debounce, then apply
    Debounce(String),
}

/// Decide how a draft filter value should be applied
pub fn plan(applied: &str, draft: &str) -> FilterPlan {
    let draft = draft.trim();
    if draft == applied {
        FilterPlan::Ignore
    } else if draft.is_empty() {
        FilterPlan::ApplyNow(String::new())
    } else {
        FilterPlan::Debounce(draft.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_draft_is_ignored() {
        assert_eq!(plan("kabel", "kabel"), FilterPlan::Ignore);
        assert_eq!(plan("", ""), FilterPlan::Ignore);
    }

    #[test]
    fn test_whitespace_only_draft_matches_applied() {
        assert_eq!(plan("kabel", "  kabel  "), FilterPlan::Ignore);
    }

    #[test]
    fn test_clearing_applies_immediately() {
        assert_eq!(plan("kabel", ""), FilterPlan::ApplyNow(String::new()));
        assert_eq!(plan("kabel", "   "), FilterPlan::ApplyNow(String::new()));
    }

    #[test]
    fn test_new_text_waits_for_debounce() {
        assert_eq!(plan("", "kab"), FilterPlan::Debounce("kab".to_string()));
        assert_eq!(
            plan("kabel", "kabel hdmi"),
            FilterPlan::Debounce("kabel hdmi".to_string())
        );
    }
}
