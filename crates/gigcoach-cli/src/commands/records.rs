//! Record management commands: users, earnings, expenses, goals,
//! forecasts

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use gigcoach_core::db::Database;
use gigcoach_core::models::{NewEarnings, NewExpense, NewGoal};
use gigcoach_core::money::format_inr;

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").context("Invalid date format (use YYYY-MM-DD)")
}

fn require_user(db: &Database, phone_number: &str) -> Result<i64> {
    match db.find_user_by_phone(phone_number)? {
        Some(user) => Ok(user.id),
        None => bail!(
            "No user with phone {}. Register first: gigcoach users add {}",
            phone_number,
            phone_number
        ),
    }
}

pub fn cmd_users_list(db: &Database) -> Result<()> {
    let users = db.list_users()?;
    if users.is_empty() {
        println!("No users yet. Register one: gigcoach users add +911234567890");
        return Ok(());
    }

    println!("👥 {} user(s)", users.len());
    for user in users {
        println!(
            "   [{}] {} (since {})",
            user.id,
            user.phone_number,
            user.created_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}

pub fn cmd_users_add(db: &Database, phone_number: &str) -> Result<()> {
    if db.find_user_by_phone(phone_number)?.is_some() {
        bail!("User {} already exists", phone_number);
    }
    let user = db.create_user(phone_number)?;
    println!("✅ Registered {} (id {})", user.phone_number, user.id);
    Ok(())
}

pub fn cmd_earnings_add(db: &Database, phone_number: &str, date: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        bail!("Amount must be a non-negative number");
    }
    let date = parse_date(date)?;
    let user_id = require_user(db, phone_number)?;

    let record = db.insert_earnings(user_id, &NewEarnings { date, amount })?;
    println!(
        "✅ Recorded ₹{} for {} on {}",
        format_inr(record.amount.round() as i64),
        phone_number,
        record.date
    );
    Ok(())
}

pub fn cmd_earnings_list(db: &Database, phone_number: &str) -> Result<()> {
    let user_id = require_user(db, phone_number)?;
    let records = db.list_earnings(user_id)?;
    if records.is_empty() {
        println!("No earnings recorded for {}", phone_number);
        return Ok(());
    }

    println!("📊 {} earnings entries", records.len());
    for record in records {
        println!(
            "   {}  ₹{}",
            record.date,
            format_inr(record.amount.round() as i64)
        );
    }
    Ok(())
}

pub fn cmd_expenses_add(
    db: &Database,
    phone_number: &str,
    category: &str,
    amount: f64,
    date: &str,
    description: Option<&str>,
) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        bail!("Amount must be a non-negative number");
    }
    let expense_date = parse_date(date)?;
    let user_id = require_user(db, phone_number)?;

    db.insert_expense(
        user_id,
        &NewExpense {
            category: category.to_string(),
            amount,
            expense_date,
            description: description.map(|s| s.to_string()),
        },
    )?;
    println!(
        "✅ Logged ₹{} ({}) on {}",
        format_inr(amount.round() as i64),
        category,
        expense_date
    );
    Ok(())
}

pub fn cmd_expenses_list(db: &Database, phone_number: &str) -> Result<()> {
    let user_id = require_user(db, phone_number)?;
    let records = db.list_expenses(user_id)?;
    if records.is_empty() {
        println!("No expenses logged for {}", phone_number);
        return Ok(());
    }

    println!("🧾 {} expense(s)", records.len());
    for record in records {
        let description = record
            .description
            .map(|d| format!(" - {}", d))
            .unwrap_or_default();
        println!(
            "   {}  ₹{}  {}{}",
            record.expense_date,
            format_inr(record.amount.round() as i64),
            record.category,
            description
        );
    }
    Ok(())
}

pub fn cmd_goals_add(
    db: &Database,
    phone_number: &str,
    name: &str,
    target: f64,
    target_date: Option<&str>,
) -> Result<()> {
    if !target.is_finite() || target <= 0.0 {
        bail!("Target amount must be positive");
    }
    let target_date = target_date.map(parse_date).transpose()?;
    let user_id = require_user(db, phone_number)?;

    let goal = db.create_goal(
        user_id,
        &NewGoal {
            goal_name: name.to_string(),
            target_amount: target,
            target_date,
        },
    )?;
    println!(
        "🎯 Created goal [{}] {} (target ₹{})",
        goal.id,
        goal.goal_name,
        format_inr(goal.target_amount.round() as i64)
    );
    Ok(())
}

pub fn cmd_goals_list(db: &Database, phone_number: &str) -> Result<()> {
    let user_id = require_user(db, phone_number)?;
    let goals = db.list_goals(user_id)?;
    if goals.is_empty() {
        println!("No goals for {}", phone_number);
        return Ok(());
    }

    println!("🎯 {} goal(s)", goals.len());
    for goal in goals {
        let deadline = goal
            .target_date
            .map(|d| format!(", by {}", d))
            .unwrap_or_default();
        println!(
            "   [{}] {}: ₹{} / ₹{}{}",
            goal.id,
            goal.goal_name,
            format_inr(goal.current_amount.round() as i64),
            format_inr(goal.target_amount.round() as i64),
            deadline
        );
    }
    Ok(())
}

pub fn cmd_goals_save(db: &Database, id: i64, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        bail!("Amount must be positive");
    }
    let goal = db.add_goal_savings(id, amount)?;
    println!(
        "💰 {} now at ₹{} / ₹{}",
        goal.goal_name,
        format_inr(goal.current_amount.round() as i64),
        format_inr(goal.target_amount.round() as i64)
    );
    Ok(())
}

pub fn cmd_goals_delete(db: &Database, id: i64) -> Result<()> {
    db.delete_goal(id)?;
    println!("🗑️  Goal {} deleted", id);
    Ok(())
}

pub fn cmd_forecast_record(db: &Database, phone_number: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        bail!("Amount must be a non-negative number");
    }
    let user_id = require_user(db, phone_number)?;
    let forecast = db.insert_forecast(user_id, amount)?;
    println!(
        "🔮 Recorded forecast ₹{} for {}",
        format_inr(forecast.predicted_amount.round() as i64),
        phone_number
    );
    Ok(())
}
