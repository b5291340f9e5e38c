//! Integration tests for gigcoach-core
//!
//! These tests exercise the full record → metrics → chat workflow the
//! way the server and CLI drive it.

use chrono::NaiveDate;
use gigcoach_core::{
    chat::handle_message,
    config::TaxConfig,
    db::Database,
    forecast::forecast_suggestion,
    metrics::{compute_gig_score, estimate_tax, generate_insights, score_inputs},
    models::{NewEarnings, NewExpense, NewGoal},
};

/// Six months of fairly steady delivery earnings
fn seed_steady_user(db: &Database, phone: &str) -> i64 {
    let user = db.create_user(phone).unwrap();
    let amounts = [18_000.0, 19_500.0, 17_800.0, 20_200.0, 19_000.0, 21_000.0];
    for (i, &amount) in amounts.iter().enumerate() {
        db.insert_earnings(
            user.id,
            &NewEarnings {
                date: NaiveDate::from_ymd_opt(2025, 4, 1)
                    .unwrap()
                    .checked_add_months(chrono::Months::new(i as u32))
                    .unwrap(),
                amount,
            },
        )
        .unwrap();
    }
    user.id
}

#[test]
fn test_full_coaching_workflow() {
    let db = Database::in_memory().unwrap();
    let user_id = seed_steady_user(&db, "+911234512345");

    // Score path: 6 steady months -> 300 + 120 + 50
    let amounts = db.earnings_amounts(user_id).unwrap();
    let inputs = score_inputs(&amounts);
    assert_eq!(inputs.month_count, 6);
    let score = compute_gig_score(inputs.month_count, inputs.volatility).unwrap();
    assert_eq!(score, 470);

    // Insights path: last month (21000) beat both the previous month and
    // the average, and the series is steady
    let insights = generate_insights(&amounts);
    assert_eq!(insights.len(), 2);
    assert!(insights[0].contains("up 11%")); // 19000 -> 21000
    assert!(insights[1].contains("higher than your average"));

    // Tax path: all six entries are inside the default fiscal window
    let config = TaxConfig::default();
    let gross = db
        .total_earnings_since(user_id, config.fiscal_year_start)
        .unwrap();
    assert_eq!(gross, 115_500.0);
    let estimate = estimate_tax(gross, 0.0, &config).unwrap();
    assert_eq!(estimate.estimated_tax, 0); // under the first slab

    // Forecast path
    db.insert_forecast(user_id, 20_000.0).unwrap();
    let latest = db.latest_forecast(user_id).unwrap();
    let suggestion = forecast_suggestion(latest.as_ref());
    assert_eq!(suggestion.suggested_saving, 5_000);

    // Chat path consumes all of the above
    let reply = handle_message(&db, "+911234512345", "1");
    assert!(reply.contains("Based on 6 months of data"));
    assert!(reply.contains("₹20,000"));
    assert!(reply.contains("₹5,000"));

    let reply = handle_message(&db, "+911234512345", "4");
    assert!(reply.contains("470/850"));
}

#[test]
fn test_tax_workflow_with_deductions() {
    let db = Database::in_memory().unwrap();
    let user = db.create_user("+911234512346").unwrap();

    let config = TaxConfig::default();

    // 7 lakh gross inside the window
    db.insert_earnings(
        user.id,
        &NewEarnings {
            date: config.fiscal_year_start,
            amount: 700_000.0,
        },
    )
    .unwrap();
    // 50k deductible expenses
    db.insert_expense(
        user.id,
        &NewExpense {
            category: "vehicle".to_string(),
            amount: 50_000.0,
            expense_date: config.fiscal_year_start,
            description: Some("engine work".to_string()),
        },
    )
    .unwrap();

    let gross = db
        .total_earnings_since(user.id, config.fiscal_year_start)
        .unwrap();
    let deductions = db
        .total_expenses_since(user.id, config.fiscal_year_start)
        .unwrap();
    let estimate = estimate_tax(gross, deductions, &config).unwrap();

    assert_eq!(estimate.taxable_income, 650_000.0);
    // 5% of 300k + 10% of 50k
    assert_eq!(estimate.estimated_tax, 20_000);
}

#[test]
fn test_chat_onboarding_to_goal_setting() {
    let db = Database::in_memory().unwrap();

    // First contact registers the sender
    let reply = handle_message(&db, "+911234512347", "hi");
    assert!(reply.contains("Welcome to GigCoach"));
    let user = db.find_user_by_phone("+911234512347").unwrap().unwrap();

    // Goal setting is menu-driven; the actual mutation goes through the
    // facade
    let reply = handle_message(&db, "+911234512347", "2");
    assert!(reply.contains("FINANCIAL GOALS"));

    let goal = db
        .create_goal(
            user.id,
            &NewGoal {
                goal_name: "Emergency Fund".to_string(),
                target_amount: 54_000.0,
                target_date: None,
            },
        )
        .unwrap();
    let goal = db.add_goal_savings(goal.id, 4_500.0).unwrap();
    assert_eq!(goal.current_amount, 4_500.0);
}
