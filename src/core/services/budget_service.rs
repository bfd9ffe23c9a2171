//! Per-user budget target, upserted by explicit command.

use crate::domain::Budget;
use crate::errors::Result;
use crate::storage::{queries, SqliteStore};

pub struct BudgetService;

impl BudgetService {
    pub fn set(store: &SqliteStore, user_id: i64, amount: i64) -> Result<()> {
        store.transaction(|tx| queries::upsert_budget(tx, user_id, amount))
    }

    /// Current budget; the first read of an unset budget persists the
    /// default so later reads are stable.
    pub fn current(store: &SqliteStore, user_id: i64) -> Result<Budget> {
        store.transaction(|tx| {
            let amount = queries::budget_or_default(tx, user_id)?;
            Ok(Budget { user_id, amount })
        })
    }
}
