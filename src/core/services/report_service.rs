//! Period aggregation and report rendering. Each requested window triggers
//! exactly one row query; recurring rows are folded into every calendar
//! period unconditionally.

use crate::core::clock::Clock;
use crate::core::services::NO_EXPENSES_MESSAGE;
use crate::domain::{capitalized, Window};
use crate::errors::Result;
use crate::storage::queries::{self, ReportRow};
use crate::storage::SqliteStore;

const LAST_WINDOW_LIMIT: i64 = 10;

pub struct ReportService;

impl ReportService {
    pub fn get_expenses(
        store: &SqliteStore,
        clock: &dyn Clock,
        user_id: i64,
        window: Window,
    ) -> Result<String> {
        let span = match window.span(clock.today()) {
            Some(span) => span,
            None => return Self::last_expenses(store, user_id),
        };

        // Budget read (with its default-persisting first touch) and the row
        // fetch share one transaction, so the report is a consistent snapshot.
        let (rows, budget) = store.transaction(|tx| {
            let budget = queries::budget_or_default(tx, user_id)?;
            let rows = queries::expenses_in_span(tx, user_id, &span)?;
            Ok((rows, budget))
        })?;

        if rows.is_empty() {
            return Ok(NO_EXPENSES_MESSAGE.to_string());
        }
        let (header, period) = labels(window);
        Ok(render_report(header, period, &rows, budget))
    }

    fn last_expenses(store: &SqliteStore, user_id: i64) -> Result<String> {
        let rows = store.read(|conn| queries::recent_expenses(conn, user_id, LAST_WINDOW_LIMIT))?;
        if rows.is_empty() {
            return Ok(NO_EXPENSES_MESSAGE.to_string());
        }
        let mut message = String::from("Last 10 added expenses:\n");
        for row in &rows {
            message.push_str(&format!(
                "\n{} | {} | {}",
                row.created.label(),
                capitalized(&row.category_name),
                row.amount
            ));
        }
        Ok(message)
    }
}

fn labels(window: Window) -> (&'static str, &'static str) {
    match window {
        Window::Today => ("Today's expenses:", "Day"),
        Window::ThisMonth => ("This month's expenses:", "Month"),
        Window::PreviousMonth => ("Last month's expenses:", "Month"),
        Window::Last => ("Last 10 added expenses:", "Month"),
    }
}

/// Walks rows ordered by category, flushing a subtotal line whenever the
/// category changes and once at the end, then appends the grand total
/// against the budget. The difference may be negative and is shown as-is.
fn render_report(header: &str, period: &str, rows: &[ReportRow], budget: i64) -> String {
    let mut message = String::from(header);
    let mut current: Option<&ReportRow> = None;
    let mut category_total = 0i64;
    let mut grand_total = 0i64;

    for row in rows {
        if current.map(|c| c.category_name.as_str()) != Some(row.category_name.as_str()) {
            if let Some(previous) = current {
                flush_subtotal(&mut message, category_total, previous.max_amount);
            }
            message.push_str(&format!("\n\n{}", capitalized(&row.category_name)));
            current = Some(row);
            category_total = 0;
        }
        message.push_str(&format!("\n> {} : {}", row.created.label(), row.amount));
        category_total += row.amount;
        grand_total += row.amount;
    }
    if let Some(previous) = current {
        flush_subtotal(&mut message, category_total, previous.max_amount);
    }

    message.push_str(&format!(
        "\n\n{} Total/Budget: {}/{} ({})",
        period,
        grand_total,
        budget,
        grand_total - budget
    ));
    message
}

fn flush_subtotal(message: &mut String, category_total: i64, max_amount: Option<i64>) {
    message.push_str(&format!("\nCategory Total: {}", category_total));
    if let Some(limit) = max_amount {
        message.push_str(&format!(" (Monthly limit: {})", limit));
    }
}
