//! Trash route handling.
//!
//! Each list lives at a base path with its trashed rows one level below at
//! `{base}/trash`. The trash view is gated on a force delete capability and
//! visitors without it are sent back to the base path.

/// True when the path addresses a trash view
pub fn is_trash_path(path: &str) -> bool {
    path.trim_end_matches('/').ends_with("/trash")
}

/// Base list path of a possibly trashed path
pub fn base_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.strip_suffix("/trash") {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => trimmed.to_string(),
    }
}

/// Trash path of a base list path
pub fn trash_path(base: &str) -> String {
    format!("{}/trash", base.trim_end_matches('/'))
}

/// Where to send a visitor, if the path is a trash view they may not see
pub fn trash_redirect(path: &str, can_force: bool) -> Option<String> {
    if !is_trash_path(path) || can_force {
        return None;
    }
    let base = base_path(path);
    // A bare "/trash" has no base list to fall back to
    if base == path.trim_end_matches('/') {
        return None;
    }
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trash_path_detection() {
        assert!(is_trash_path("/categories/trash"));
        assert!(is_trash_path("/categories/trash/"));
        assert!(!is_trash_path("/categories"));
        assert!(!is_trash_path("/categories/trashed"));
    }

    #[test]
    fn test_base_path_strips_the_suffix() {
        assert_eq!(base_path("/categories/trash"), "/categories");
        assert_eq!(base_path("/categories/trash/"), "/categories");
        assert_eq!(base_path("/categories"), "/categories");
    }

    #[test]
    fn test_trash_path_appends_the_suffix() {
        assert_eq!(trash_path("/categories"), "/categories/trash");
        assert_eq!(trash_path("/categories/"), "/categories/trash");
    }

    #[test]
    fn test_redirect_only_without_capability() {
        assert_eq!(
            trash_redirect("/categories/trash", false),
            Some("/categories".to_string())
        );
        assert_eq!(trash_redirect("/categories/trash", true), None);
        assert_eq!(trash_redirect("/categories", false), None);
    }

    #[test]
    fn test_redirect_never_loops_on_bare_trash() {
        assert_eq!(trash_redirect("/trash", false), None);
    }
}
