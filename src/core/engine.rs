//! Facade consumed by the conversational front-end. Each method maps to
//! one front-end intent and returns the exact text (or error message) to
//! show the user.

use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::services::{BudgetService, CategoryService, ExpenseService, ReportService};
use crate::domain::{normalize_name, Window};
use crate::errors::{LedgerError, Result};
use crate::storage::SqliteStore;

const CATEGORY_DELETED_MESSAGE: &str = "Category successfully deleted";
const DUPLICATE_CATEGORY_MESSAGE: &str =
    "Category with this name already exists. Specify a different name";

/// Coordinates the registry, ledger, and reporter over one shared store.
pub struct Engine {
    store: SqliteStore,
    clock: Box<dyn Clock>,
}

impl Engine {
    pub fn new(store: SqliteStore, clock: Box<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Opens the configured database and stamps entries in the configured
    /// time zone.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = SqliteStore::open(&config.database_path)?;
        let clock = SystemClock::new(config.tz()?);
        Ok(Self::new(store, Box::new(clock)))
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    pub fn set_budget(&self, user_id: i64, amount: i64) -> Result<String> {
        self.guard(BudgetService::set(&self.store, user_id, amount))?;
        Ok(format!("Monthly budget set to {amount}"))
    }

    pub fn add_category(&self, user_id: i64, raw: &str) -> Result<String> {
        match self.guard(CategoryService::add_category(&self.store, user_id, raw))? {
            Some(category) => Ok(format!("Category {} saved", category.name)),
            None => Ok(DUPLICATE_CATEGORY_MESSAGE.to_string()),
        }
    }

    pub fn list_categories(&self, user_id: i64) -> Result<String> {
        self.guard(CategoryService::get_category_list(&self.store, user_id))
    }

    pub fn delete_category(&self, user_id: i64, name: &str) -> Result<String> {
        match self.guard(CategoryService::get_category(&self.store, user_id, name))? {
            None => Err(LedgerError::CategoryNotFound(normalize_name(name))),
            Some(category) => {
                self.guard(CategoryService::remove_category(&self.store, &category))?;
                Ok(CATEGORY_DELETED_MESSAGE.to_string())
            }
        }
    }

    pub fn add_expense(&self, user_id: i64, raw: &str) -> Result<String> {
        self.guard(ExpenseService::add_expense(
            &self.store,
            self.clock.as_ref(),
            user_id,
            raw,
        ))
    }

    pub fn delete_last(&self, user_id: i64) -> Result<String> {
        self.guard(ExpenseService::delete_last(&self.store, user_id))
    }

    pub fn get_expenses(&self, user_id: i64, window: Window) -> Result<String> {
        self.guard(ReportService::get_expenses(
            &self.store,
            self.clock.as_ref(),
            user_id,
            window,
        ))
    }

    /// Storage failures are logged with full detail and surfaced to the
    /// user as a generic message; domain errors pass through verbatim.
    fn guard<T>(&self, result: Result<T>) -> Result<T> {
        result.map_err(|err| match err {
            LedgerError::Storage(detail) => {
                tracing::error!(%detail, "storage operation failed");
                LedgerError::Storage("unexpected error, please try again".into())
            }
            other => other,
        })
    }
}
