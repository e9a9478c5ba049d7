//! Page category constants for screen standardization.
//!
//! Every screen rendered inside the shell declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_document--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! owning module directory.

/// List of records — cards/table with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / static overview.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case / action page (upload, generation).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_USECASE];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_document--list"));
        assert!(is_valid_page_id("u101_upload_documents--usecase"));
        assert!(!is_valid_page_id("a001_document"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("dashboard"));
        assert!(!is_known_category("detail"));
    }
}
