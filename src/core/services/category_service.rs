//! Category registry: identity, creation, lookup, and removal of
//! user-owned categories. Existence is always re-derived from the live
//! table, never from a cached snapshot.

use crate::core::parser::parse_signed_integer;
use crate::domain::{normalize_name, Category};
use crate::errors::{LedgerError, Result};
use crate::storage::{queries, SqliteStore};

const NO_CATEGORIES_MESSAGE: &str = "There are no categories yet";

pub struct CategoryService;

impl CategoryService {
    /// Parses `name` or `name limit` and creates the category. Returns
    /// `Ok(None)` when the `(user, name)` pair already exists; the lookup
    /// and insert share one transaction so concurrent calls cannot race a
    /// duplicate past the check.
    pub fn add_category(store: &SqliteStore, user_id: i64, raw: &str) -> Result<Option<Category>> {
        let (name, max_amount) = parse_definition(raw)?;
        store.transaction(|tx| {
            if queries::category_by_name(tx, user_id, &name)?.is_some() {
                return Ok(None);
            }
            queries::insert_category(tx, user_id, &name, max_amount).map(Some)
        })
    }

    pub fn get_category(store: &SqliteStore, user_id: i64, name: &str) -> Result<Option<Category>> {
        let name = normalize_name(name);
        store.read(|conn| queries::category_by_name(conn, user_id, &name))
    }

    pub fn get_all_categories(store: &SqliteStore, user_id: i64) -> Result<Vec<Category>> {
        store.read(|conn| queries::categories_for_user(conn, user_id))
    }

    /// Removes the category together with every expense it owns. Both
    /// deletes run in one transaction; a failure of either leaves the pair
    /// untouched, so no orphaned expense can survive.
    pub fn remove_category(store: &SqliteStore, category: &Category) -> Result<()> {
        store.transaction(|tx| {
            let dropped = queries::delete_expenses_for_category(tx, category.id)?;
            queries::delete_category(tx, category.id)?;
            tracing::debug!(category = %category.name, expenses = dropped, "category removed");
            Ok(())
        })
    }

    /// Human-readable listing of all categories for one user.
    pub fn get_category_list(store: &SqliteStore, user_id: i64) -> Result<String> {
        let categories = Self::get_all_categories(store, user_id)?;
        if categories.is_empty() {
            return Ok(NO_CATEGORIES_MESSAGE.to_string());
        }
        let mut message = String::from("Categories:\n");
        for category in categories {
            message.push('\n');
            message.push_str(&category.display_label());
        }
        Ok(message)
    }
}

/// Grammar for explicit category creation: the trailing token is an
/// optional signed monthly limit, everything before it is the name.
fn parse_definition(raw: &str) -> Result<(String, Option<i64>)> {
    let mut tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(LedgerError::Parse {
            line: raw.trim().to_string(),
        });
    }
    let mut max_amount = None;
    if tokens.len() >= 2 {
        if let Some(limit) = parse_signed_integer(tokens[tokens.len() - 1]) {
            max_amount = Some(limit);
            tokens.pop();
        }
    }
    Ok((normalize_name(&tokens.join(" ")), max_amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_without_limit() {
        assert_eq!(parse_definition("Food").unwrap(), ("food".into(), None));
    }

    #[test]
    fn definition_with_limit() {
        assert_eq!(
            parse_definition("Transport 500").unwrap(),
            ("transport".into(), Some(500))
        );
    }

    #[test]
    fn multiword_name_with_limit() {
        assert_eq!(
            parse_definition("Coffee Shop 150").unwrap(),
            ("coffee shop".into(), Some(150))
        );
    }

    #[test]
    fn single_numeric_token_is_a_name() {
        assert_eq!(parse_definition("2024").unwrap(), ("2024".into(), None));
    }

    #[test]
    fn empty_definition_fails() {
        assert!(parse_definition("   ").is_err());
    }
}
