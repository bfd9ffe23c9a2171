//! Expense ledger: turns parsed entries into persisted rows and handles
//! targeted deletion.

use crate::core::clock::Clock;
use crate::core::parser::{self, ParsedEntry};
use crate::core::services::NO_EXPENSES_MESSAGE;
use crate::domain::Created;
use crate::errors::Result;
use crate::storage::{queries, SqliteStore};

const LAST_DELETED_MESSAGE: &str = "Last expense was successfully deleted";

pub struct ExpenseService;

impl ExpenseService {
    /// Parses `raw` and persists one expense row per entry. Unknown
    /// categories are created on the fly with no limit. The whole batch is
    /// one transaction: a failure on any entry rolls back all of them.
    pub fn add_expense(
        store: &SqliteStore,
        clock: &dyn Clock,
        user_id: i64,
        raw: &str,
    ) -> Result<String> {
        let entries = parser::parse(raw)?;
        let now = clock.now().naive_local();
        store.transaction(|tx| {
            for entry in &entries {
                let category = match queries::category_by_name(tx, user_id, &entry.category_name)? {
                    Some(existing) => existing,
                    None => queries::insert_category(tx, user_id, &entry.category_name, None)?,
                };
                let created = if entry.recurring {
                    Created::Monthly
                } else {
                    Created::At(now)
                };
                queries::insert_expense(tx, user_id, category.id, entry.amount, &created)?;
            }
            Ok(())
        })?;
        Ok(confirmation(&entries))
    }

    /// Deletes the most recently created timestamped expense. Recurring
    /// rows have no chronological position and are never selected.
    pub fn delete_last(store: &SqliteStore, user_id: i64) -> Result<String> {
        store.transaction(|tx| match queries::latest_expense_id(tx, user_id)? {
            None => Ok(NO_EXPENSES_MESSAGE.to_string()),
            Some(expense_id) => {
                queries::delete_expense(tx, expense_id)?;
                Ok(LAST_DELETED_MESSAGE.to_string())
            }
        })
    }
}

fn confirmation(entries: &[ParsedEntry]) -> String {
    let mut message = String::from("Expenses added:");
    for entry in entries {
        message.push_str(&format!("\n{} {}", entry.category_name, entry.amount));
        if entry.recurring {
            message.push_str(" (Monthly)");
        }
    }
    message
}
