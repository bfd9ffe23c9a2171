//! Domain types for user-owned expense categories.

/// A named grouping of expenses, optionally capped by a monthly limit.
///
/// Identity is the `(user_id, name)` pair; `id` is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub max_amount: Option<i64>,
}

impl Category {
    /// One listing line: the name plus the monthly limit when one is set.
    pub fn display_label(&self) -> String {
        match self.max_amount {
            Some(limit) => format!("{} (Monthly Limit: {})", self.name, limit),
            None => self.name.clone(),
        }
    }
}

/// Canonical form of a category name: inner whitespace collapsed, trimmed,
/// lower-cased. Applied everywhere names are compared, so `"  TRANSPORT  "`
/// and `"transport"` are the same entity.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Upper-cases the first character for report headings.
pub fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_trims_collapses_and_lowercases() {
        assert_eq!(normalize_name("  TRANSPORT  "), "transport");
        assert_eq!(normalize_name("Coffee   Shop"), "coffee shop");
        assert_eq!(normalize_name("food"), "food");
    }

    #[test]
    fn display_label_includes_limit_only_when_set() {
        let capped = Category {
            id: 1,
            user_id: 1,
            name: "transport".into(),
            max_amount: Some(500),
        };
        assert_eq!(capped.display_label(), "transport (Monthly Limit: 500)");

        let open = Category {
            max_amount: None,
            ..capped
        };
        assert_eq!(open.display_label(), "transport");
    }

    #[test]
    fn capitalized_handles_empty_and_single_word() {
        assert_eq!(capitalized("food"), "Food");
        assert_eq!(capitalized(""), "");
    }
}
