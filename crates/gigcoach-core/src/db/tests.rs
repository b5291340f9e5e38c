//! Database layer tests

use chrono::NaiveDate;

use super::Database;
use crate::error::Error;
use crate::models::{NewEarnings, NewExpense, NewGoal, NewLoan};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_find_or_create_user() {
    let db = Database::in_memory().unwrap();

    assert!(db.find_user_by_phone("+911234567890").unwrap().is_none());

    let created = db.find_or_create_user("+911234567890").unwrap();
    let found = db.find_or_create_user("+911234567890").unwrap();
    assert_eq!(created.id, found.id);
    assert_eq!(db.list_users().unwrap().len(), 1);
}

#[test]
fn test_earnings_ordered_by_date() {
    let db = Database::in_memory().unwrap();
    let user = db.create_user("+911111111111").unwrap();

    // Inserted out of order; reads must come back date ascending
    for (d, amount) in [
        (date(2025, 6, 1), 12000.0),
        (date(2025, 4, 1), 10000.0),
        (date(2025, 5, 1), 11000.0),
    ] {
        db.insert_earnings(user.id, &NewEarnings { date: d, amount })
            .unwrap();
    }

    let amounts = db.earnings_amounts(user.id).unwrap();
    assert_eq!(amounts, vec![10000.0, 11000.0, 12000.0]);

    let records = db.list_earnings(user.id).unwrap();
    assert_eq!(records[0].date, date(2025, 4, 1));
    assert_eq!(records[2].date, date(2025, 6, 1));
}

#[test]
fn test_fiscal_window_totals() {
    let db = Database::in_memory().unwrap();
    let user = db.create_user("+912222222222").unwrap();

    // One entry before the window, two inside
    db.insert_earnings(
        user.id,
        &NewEarnings {
            date: date(2025, 3, 15),
            amount: 50000.0,
        },
    )
    .unwrap();
    db.insert_earnings(
        user.id,
        &NewEarnings {
            date: date(2025, 4, 1),
            amount: 20000.0,
        },
    )
    .unwrap();
    db.insert_earnings(
        user.id,
        &NewEarnings {
            date: date(2025, 5, 1),
            amount: 30000.0,
        },
    )
    .unwrap();

    let window_start = date(2025, 4, 1);
    assert_eq!(
        db.total_earnings_since(user.id, window_start).unwrap(),
        50000.0
    );

    db.insert_expense(
        user.id,
        &NewExpense {
            category: "fuel".to_string(),
            amount: 4000.0,
            expense_date: date(2025, 4, 10),
            description: None,
        },
    )
    .unwrap();
    db.insert_expense(
        user.id,
        &NewExpense {
            category: "fuel".to_string(),
            amount: 9999.0,
            expense_date: date(2025, 2, 1),
            description: Some("pre-window".to_string()),
        },
    )
    .unwrap();

    assert_eq!(
        db.total_expenses_since(user.id, window_start).unwrap(),
        4000.0
    );
}

#[test]
fn test_totals_empty_are_zero() {
    let db = Database::in_memory().unwrap();
    let user = db.create_user("+913333333333").unwrap();

    assert_eq!(
        db.total_earnings_since(user.id, date(2025, 4, 1)).unwrap(),
        0.0
    );
    assert_eq!(
        db.total_expenses_since(user.id, date(2025, 4, 1)).unwrap(),
        0.0
    );
}

#[test]
fn test_goal_lifecycle() {
    let db = Database::in_memory().unwrap();
    let user = db.create_user("+914444444444").unwrap();

    let goal = db
        .create_goal(
            user.id,
            &NewGoal {
                goal_name: "Emergency Fund".to_string(),
                target_amount: 30000.0,
                target_date: Some(date(2026, 3, 31)),
            },
        )
        .unwrap();
    assert_eq!(goal.current_amount, 0.0);

    // Savings accumulate
    let goal = db.add_goal_savings(goal.id, 5000.0).unwrap();
    let goal = db.add_goal_savings(goal.id, 2500.0).unwrap();
    assert_eq!(goal.current_amount, 7500.0);

    // Wholesale edit replaces name and target but keeps savings
    let goal = db.update_goal(goal.id, "Vehicle Upgrade", 60000.0).unwrap();
    assert_eq!(goal.goal_name, "Vehicle Upgrade");
    assert_eq!(goal.target_amount, 60000.0);
    assert_eq!(goal.current_amount, 7500.0);

    db.delete_goal(goal.id).unwrap();
    assert!(db.get_goal(goal.id).unwrap().is_none());
    assert!(matches!(
        db.delete_goal(goal.id),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_goal_update_missing_is_not_found() {
    let db = Database::in_memory().unwrap();
    assert!(matches!(
        db.add_goal_savings(999, 100.0),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        db.update_goal(999, "x", 1.0),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_latest_forecast_wins() {
    let db = Database::in_memory().unwrap();
    let user = db.create_user("+915555555555").unwrap();

    assert!(db.latest_forecast(user.id).unwrap().is_none());

    db.insert_forecast(user.id, 18000.0).unwrap();
    db.insert_forecast(user.id, 21000.0).unwrap();

    let latest = db.latest_forecast(user.id).unwrap().unwrap();
    assert_eq!(latest.predicted_amount, 21000.0);
}

#[test]
fn test_loans_ordered_by_due_date() {
    let db = Database::in_memory().unwrap();
    let user = db.create_user("+916666666666").unwrap();

    db.insert_loan(
        user.id,
        &NewLoan {
            lender_name: "GigCredit".to_string(),
            total_amount: 10000.0,
            outstanding_amount: 8000.0,
            interest_rate: Some(2.0),
            due_date: Some(date(2025, 12, 1)),
        },
    )
    .unwrap();
    db.insert_loan(
        user.id,
        &NewLoan {
            lender_name: "Platform Advance".to_string(),
            total_amount: 5000.0,
            outstanding_amount: 5000.0,
            interest_rate: None,
            due_date: Some(date(2025, 9, 1)),
        },
    )
    .unwrap();

    let loans = db.list_loans(user.id).unwrap();
    assert_eq!(loans.len(), 2);
    assert_eq!(loans[0].lender_name, "Platform Advance");
}

#[test]
fn test_stats_counts() {
    let db = Database::in_memory().unwrap();
    let user = db.create_user("+917777777777").unwrap();
    db.insert_earnings(
        user.id,
        &NewEarnings {
            date: date(2025, 4, 1),
            amount: 100.0,
        },
    )
    .unwrap();

    let stats = db.stats().unwrap();
    assert_eq!(stats.users, 1);
    assert_eq!(stats.earnings, 1);
    assert_eq!(stats.goals, 0);
}
