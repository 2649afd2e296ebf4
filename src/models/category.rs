//! Category tags
//!
//! Budgets, goals and recurring items carry a free-form category tag. The
//! well-known tags below get a friendly label; anything else is shown as-is.

/// Tag used when none is given
pub const DEFAULT_CATEGORY: &str = "other";

/// Default tag for savings goals
pub const DEFAULT_GOAL_CATEGORY: &str = "savings";

/// Known category tags and their display labels
pub const KNOWN_CATEGORIES: &[(&str, &str)] = &[
    ("housing", "Housing"),
    ("utilities", "Utilities"),
    ("insurance", "Insurance"),
    ("subscriptions", "Subscriptions"),
    ("entertainment", "Entertainment"),
    ("transportation", "Transportation"),
    ("food", "Food & Dining"),
    ("savings", "Savings"),
    ("other", "Other"),
];

/// Display label for a category tag
pub fn category_label(tag: &str) -> &str {
    KNOWN_CATEGORIES
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(tag))
        .map(|(_, label)| *label)
        .unwrap_or(tag)
}

/// Normalize user input into a tag (trimmed, lowercase, default when empty)
pub fn normalize_category(input: Option<&str>, default: &str) -> String {
    match input.map(str::trim) {
        Some(tag) if !tag.is_empty() => tag.to_lowercase(),
        _ => default.to_string(),
    }
}
