//! Parameterized row-level queries shared by the services. Every function
//! takes the caller's connection (or open transaction) so multi-step
//! operations compose into one atomic unit.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{Category, Created, DateSpan, Expense, DEFAULT_BUDGET, MONTHLY_SENTINEL};
use crate::errors::Result;

/// Projection used by the reporter: category metadata joined onto each
/// expense row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub category_name: String,
    pub max_amount: Option<i64>,
    pub created: Created,
    pub amount: i64,
}

pub fn insert_category(
    conn: &Connection,
    user_id: i64,
    name: &str,
    max_amount: Option<i64>,
) -> Result<Category> {
    conn.execute(
        "INSERT INTO categories(user_id, name, max_amount) VALUES (?1, ?2, ?3)",
        params![user_id, name, max_amount],
    )?;
    Ok(Category {
        id: conn.last_insert_rowid(),
        user_id,
        name: name.to_string(),
        max_amount,
    })
}

pub fn category_by_name(conn: &Connection, user_id: i64, name: &str) -> Result<Option<Category>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, user_id, name, max_amount FROM categories WHERE user_id = ?1 AND name = ?2",
    )?;
    Ok(stmt
        .query_row(params![user_id, name], row_to_category)
        .optional()?)
}

pub fn categories_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, user_id, name, max_amount FROM categories WHERE user_id = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt.query_map(params![user_id], row_to_category)?;
    let mut categories = Vec::new();
    for row in rows {
        categories.push(row?);
    }
    Ok(categories)
}

pub fn delete_category(conn: &Connection, category_id: i64) -> Result<()> {
    conn.execute("DELETE FROM categories WHERE id = ?1", params![category_id])?;
    Ok(())
}

pub fn insert_expense(
    conn: &Connection,
    user_id: i64,
    category_id: i64,
    amount: i64,
    created: &Created,
) -> Result<Expense> {
    conn.execute(
        "INSERT INTO expenses(user_id, category_id, amount, created) VALUES (?1, ?2, ?3, ?4)",
        params![user_id, category_id, amount, created.to_storage()],
    )?;
    Ok(Expense {
        id: conn.last_insert_rowid(),
        user_id,
        category_id,
        amount,
        created: created.clone(),
    })
}

/// Cascade half of category removal; returns the number of rows dropped.
pub fn delete_expenses_for_category(conn: &Connection, category_id: i64) -> Result<usize> {
    Ok(conn.execute(
        "DELETE FROM expenses WHERE category_id = ?1",
        params![category_id],
    )?)
}

/// Most recently created timestamped expense. Recurring rows carry no
/// chronological order and are excluded.
pub fn latest_expense_id(conn: &Connection, user_id: i64) -> Result<Option<i64>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id FROM expenses WHERE user_id = ?1 AND created <> ?2 \
         ORDER BY created DESC LIMIT 1",
    )?;
    Ok(stmt
        .query_row(params![user_id, MONTHLY_SENTINEL], |row| row.get(0))
        .optional()?)
}

pub fn delete_expense(conn: &Connection, expense_id: i64) -> Result<()> {
    conn.execute("DELETE FROM expenses WHERE id = ?1", params![expense_id])?;
    Ok(())
}

/// Timestamped expenses, newest first, for the last-N listing.
pub fn recent_expenses(conn: &Connection, user_id: i64, limit: i64) -> Result<Vec<ReportRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT c.name, c.max_amount, e.created, e.amount \
         FROM expenses e JOIN categories c ON e.category_id = c.id \
         WHERE e.user_id = ?1 AND e.created <> ?2 \
         ORDER BY e.created DESC LIMIT ?3",
    )?;
    let rows = stmt.query_map(params![user_id, MONTHLY_SENTINEL, limit], row_to_raw)?;
    collect_report_rows(rows)
}

/// Rows for one calendar window: timestamps inside `[start, end)` plus every
/// recurring row. Ordered by category name, then chronologically; the
/// sentinel sorts after timestamps, so recurring rows trail their category.
pub fn expenses_in_span(conn: &Connection, user_id: i64, span: &DateSpan) -> Result<Vec<ReportRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT c.name, c.max_amount, e.created, e.amount \
         FROM expenses e JOIN categories c ON e.category_id = c.id \
         WHERE e.user_id = ?1 AND ((e.created >= ?2 AND e.created < ?3) OR e.created = ?4) \
         ORDER BY c.name ASC, e.created ASC",
    )?;
    let rows = stmt.query_map(
        params![user_id, span.start_text(), span.end_text(), MONTHLY_SENTINEL],
        row_to_raw,
    )?;
    collect_report_rows(rows)
}

pub fn budget_amount(conn: &Connection, user_id: i64) -> Result<Option<i64>> {
    let mut stmt = conn.prepare_cached("SELECT amount FROM budget WHERE user_id = ?1")?;
    Ok(stmt
        .query_row(params![user_id], |row| row.get(0))
        .optional()?)
}

pub fn upsert_budget(conn: &Connection, user_id: i64, amount: i64) -> Result<()> {
    conn.execute(
        "INSERT INTO budget(user_id, amount) VALUES (?1, ?2) \
         ON CONFLICT(user_id) DO UPDATE SET amount = excluded.amount",
        params![user_id, amount],
    )?;
    Ok(())
}

/// Reads the user's budget, persisting the default on first read so
/// subsequent reads are stable.
pub fn budget_or_default(conn: &Connection, user_id: i64) -> Result<i64> {
    if let Some(amount) = budget_amount(conn, user_id)? {
        return Ok(amount);
    }
    upsert_budget(conn, user_id, DEFAULT_BUDGET)?;
    Ok(DEFAULT_BUDGET)
}

type RawRow = (String, Option<i64>, String, i64);

fn row_to_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        max_amount: row.get(3)?,
    })
}

fn row_to_raw(row: &Row<'_>) -> rusqlite::Result<RawRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn collect_report_rows(
    rows: impl Iterator<Item = rusqlite::Result<RawRow>>,
) -> Result<Vec<ReportRow>> {
    let mut report_rows = Vec::new();
    for row in rows {
        let (category_name, max_amount, created, amount) = row?;
        report_rows.push(ReportRow {
            category_name,
            max_amount,
            created: Created::from_storage(&created)?,
            amount,
        });
    }
    Ok(report_rows)
}
