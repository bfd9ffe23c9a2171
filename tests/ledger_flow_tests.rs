mod common;

use chrono::TimeZone;
use chrono_tz::Tz;
use common::{engine, USER};
use expense_core::core::clock::FixedClock;
use expense_core::core::services::{CategoryService, ExpenseService};
use expense_core::domain::Window;
use expense_core::errors::LedgerError;
use expense_core::storage::SqliteStore;

fn clock_at(day: u32, hour: u32) -> FixedClock {
    FixedClock::new(Tz::UTC.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap())
}

#[test]
fn single_expense_autocreates_its_category() {
    let engine = engine();
    engine.add_expense(USER, "Transport -1000").unwrap();

    let category = CategoryService::get_category(engine.store(), USER, "transport")
        .unwrap()
        .expect("category was auto-created");
    assert_eq!(category.max_amount, None, "implicit categories carry no limit");

    let report = engine.get_expenses(USER, Window::Last).unwrap();
    assert!(report.starts_with("Last 10 added expenses:"));
    assert!(report.contains("-1000"), "unexpected report: {report}");
}

#[test]
fn second_expense_reuses_the_existing_category() {
    let engine = engine();
    engine.add_expense(USER, "Food -100").unwrap();
    engine.add_expense(USER, "FOOD -200").unwrap();

    let all = CategoryService::get_all_categories(engine.store(), USER).unwrap();
    assert_eq!(all.len(), 1, "no duplicate category per spelling");
}

#[test]
fn add_expense_confirms_each_entry() {
    let engine = engine();
    let answer = engine.add_expense(USER, "Transport -1000\nRent -15000 M").unwrap();
    assert_eq!(answer, "Expenses added:\ntransport -1000\nrent -15000 (Monthly)");
}

#[test]
fn a_bad_line_persists_nothing() {
    let engine = engine();
    let err = engine
        .add_expense(USER, "Transport -1000\nnonsense")
        .expect_err("second line is malformed");
    assert!(matches!(err, LedgerError::Parse { .. }), "unexpected error: {err:?}");

    assert_eq!(
        engine.get_expenses(USER, Window::Last).unwrap(),
        "There are no expenses yet"
    );
    assert!(
        CategoryService::get_all_categories(engine.store(), USER)
            .unwrap()
            .is_empty(),
        "no category may be created by a failed batch"
    );
}

#[test]
fn parse_error_carries_the_offending_line_and_usage() {
    let engine = engine();
    let err = engine.add_expense(USER, "just words").expect_err("no amount");
    let message = err.to_string();
    assert!(message.contains("just words"), "unexpected message: {message}");
    assert!(message.contains("Transport -1000"), "usage example missing: {message}");
}

#[test]
fn delete_last_removes_the_newest_timestamped_row() {
    let store = SqliteStore::open_in_memory().unwrap();
    ExpenseService::add_expense(&store, &clock_at(1, 9), USER, "Food -100").unwrap();
    ExpenseService::add_expense(&store, &clock_at(3, 9), USER, "Food -200").unwrap();
    ExpenseService::add_expense(&store, &clock_at(2, 9), USER, "Rent -500 M").unwrap();

    let answer = ExpenseService::delete_last(&store, USER).unwrap();
    assert_eq!(answer, "Last expense was successfully deleted");

    let listing = expense_core::core::services::ReportService::get_expenses(
        &store,
        &clock_at(5, 12),
        USER,
        Window::Last,
    )
    .unwrap();
    assert!(listing.contains("-100"), "older row survives: {listing}");
    assert!(!listing.contains("-200"), "newest row was deleted: {listing}");
}

#[test]
fn delete_last_never_selects_recurring_rows() {
    let store = SqliteStore::open_in_memory().unwrap();
    ExpenseService::add_expense(&store, &clock_at(1, 9), USER, "Rent -500 M").unwrap();

    let answer = ExpenseService::delete_last(&store, USER).unwrap();
    assert_eq!(answer, "There are no expenses yet");
}

#[test]
fn delete_last_on_an_empty_ledger_reports_nothing_to_delete() {
    let engine = engine();
    assert_eq!(engine.delete_last(USER).unwrap(), "There are no expenses yet");
}
