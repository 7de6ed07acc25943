//! PageFrame — standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"a002_product--list"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a002_product/` directory.
//!
//! Usage:
//! ```rust,ignore
//! use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
//!
//! #[component]
//! pub fn MyList() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
//!             <div class="page__header">...</div>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use leptos::prelude::*;

/// List of records — table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// System page (fallbacks, service screens).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Root wrapper that sets standard metadata on every routed page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a002_product--list"`.
    /// Used for DOM inspection and IDE navigation.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_page_ids() {
        assert!(is_valid_page_id("a002_product--list"));
        assert!(is_valid_page_id("not_found--system"));
    }

    #[test]
    fn test_invalid_page_ids() {
        assert!(!is_valid_page_id("a002_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_product--"));
    }
}
