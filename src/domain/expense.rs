//! Domain types for individual expense entries.

use chrono::NaiveDateTime;

use crate::errors::{LedgerError, Result};

/// Sentinel stored in place of a timestamp for recurring entries.
pub const MONTHLY_SENTINEL: &str = "Monthly";

/// Storage format for expense timestamps, in the user's configured time zone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DISPLAY_FORMAT: &str = "%d-%m %H:%M";

/// When an expense was recorded: a concrete instant, or the recurring
/// sentinel that counts toward every calendar period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Created {
    At(NaiveDateTime),
    Monthly,
}

impl Created {
    pub fn to_storage(&self) -> String {
        match self {
            Created::At(instant) => instant.format(TIMESTAMP_FORMAT).to_string(),
            Created::Monthly => MONTHLY_SENTINEL.to_string(),
        }
    }

    pub fn from_storage(raw: &str) -> Result<Self> {
        if raw == MONTHLY_SENTINEL {
            return Ok(Created::Monthly);
        }
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .map(Created::At)
            .map_err(|_| LedgerError::Storage(format!("unrecognized created value `{raw}`")))
    }

    /// Short form used in report lines.
    pub fn label(&self) -> String {
        match self {
            Created::At(instant) => instant.format(DISPLAY_FORMAT).to_string(),
            Created::Monthly => MONTHLY_SENTINEL.to_string(),
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self, Created::Monthly)
    }
}

/// A single persisted expense row. `category_id` must reference a live
/// category owned by the same `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub amount: i64,
    pub created: Created,
}
