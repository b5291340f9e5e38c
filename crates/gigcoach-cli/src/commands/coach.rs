//! Coaching commands: run the metrics engine, forecast adapter, and
//! dialogue router locally against the database

use anyhow::{bail, Result};
use gigcoach_core::chat::handle_message;
use gigcoach_core::config::TaxConfig;
use gigcoach_core::db::Database;
use gigcoach_core::forecast::forecast_suggestion;
use gigcoach_core::metrics::{
    compute_gig_score, estimate_tax, generate_insights, score_inputs, STABILITY_THRESHOLD,
};
use gigcoach_core::money::format_inr;

fn require_user(db: &Database, phone_number: &str) -> Result<i64> {
    match db.find_user_by_phone(phone_number)? {
        Some(user) => Ok(user.id),
        None => bail!("No user with phone {}", phone_number),
    }
}

pub fn cmd_score(db: &Database, phone_number: &str) -> Result<()> {
    let user_id = require_user(db, phone_number)?;
    let amounts = db.earnings_amounts(user_id)?;

    let inputs = score_inputs(&amounts);
    let score = compute_gig_score(inputs.month_count, inputs.volatility)?;

    let stability = match inputs.volatility {
        Some(v) if v < STABILITY_THRESHOLD => "Good",
        _ => "Needs Improvement",
    };

    println!("💳 GigScore: {}/850", score);
    println!("   History:   {} months", inputs.month_count);
    println!("   Stability: {}", stability);
    if let Some(v) = inputs.volatility {
        println!("   Volatility: {:.0}", v);
    }
    Ok(())
}

pub fn cmd_tax(db: &Database, phone_number: &str) -> Result<()> {
    let user_id = require_user(db, phone_number)?;
    let config = TaxConfig::load()?;

    let gross = db.total_earnings_since(user_id, config.fiscal_year_start)?;
    let deductions = db.total_expenses_since(user_id, config.fiscal_year_start)?;
    let estimate = estimate_tax(gross, deductions, &config)?;

    println!("🧾 Tax estimate since {}", config.fiscal_year_start);
    println!(
        "   Gross income:  ₹{}",
        format_inr(estimate.gross_income.round() as i64)
    );
    println!(
        "   Deductions:    ₹{}",
        format_inr(estimate.total_deductions.round() as i64)
    );
    println!(
        "   Taxable:       ₹{}",
        format_inr(estimate.taxable_income.round() as i64)
    );
    println!("   Estimated tax: ₹{}", format_inr(estimate.estimated_tax));
    Ok(())
}

pub fn cmd_insights(db: &Database, phone_number: &str) -> Result<()> {
    let user_id = require_user(db, phone_number)?;
    let amounts = db.earnings_amounts(user_id)?;

    println!("💡 Insights for {}:", phone_number);
    for insight in generate_insights(&amounts) {
        println!("   • {}", insight);
    }
    Ok(())
}

pub fn cmd_forecast_show(db: &Database, phone_number: &str) -> Result<()> {
    let user_id = require_user(db, phone_number)?;
    let latest = db.latest_forecast(user_id)?;
    let suggestion = forecast_suggestion(latest.as_ref());

    match suggestion.predicted_amount {
        Some(predicted) => {
            println!(
                "🔮 Latest forecast: ₹{}",
                format_inr(predicted.round() as i64)
            );
            println!(
                "💡 Suggested saving: ₹{}",
                format_inr(suggestion.suggested_saving)
            );
        }
        None => println!("No forecast recorded yet for {}", phone_number),
    }
    Ok(())
}

pub fn cmd_chat(db: &Database, phone_number: &str, message: &str) -> Result<()> {
    let reply = handle_message(db, phone_number, message);
    println!("{}", reply);
    Ok(())
}
