//! Reply templates
//!
//! Pure text rendering. Nothing here touches the database; callers pass
//! in any computed figures. Texts match what the product has always
//! sent, including the menu numbering the classifier keys off.

use crate::metrics::STABILITY_THRESHOLD;
use crate::models::EarningsSummary;
use crate::money::format_inr;

/// First-contact welcome; lists the same 5 options as the returning one
pub fn welcome_new() -> String {
    "👋 Welcome to GigCoach! 🍟\n\nI'm your personal financial coach for the gig economy. \n\nWhat would you like to do?\n\n1. 📊 Get Earnings Forecast\n2. 🎯 Set Financial Goals  \n3. 🆘 Emergency Loan Options\n4. 💳 Check & Build Credit Score\n5. 💡 Financial Tips\n\n*Reply with 1-5*".to_string()
}

/// Welcome for a sender we already know
pub fn welcome_returning() -> String {
    "👋 Welcome back! 🍟\n\nWhat would you like to do today?\n\n1. 📊 Earnings Forecast\n2. 🎯 Financial Goals  \n3. 🆘 Emergency Loans\n4. 💳 Credit Score\n5. 💡 Financial Tips\n\n*Reply with 1-5*".to_string()
}

/// Forecast intent with no earnings on record
pub fn no_earnings_data() -> String {
    "📊 I don't have any earnings data for you yet. Please add some first!\n\nTo return to the main menu, text *menu*.".to_string()
}

/// Composed earnings analysis; `forecast_fragment` comes from the
/// forecast adapter (or its unavailable/no-data stand-ins)
pub fn earnings_analysis(summary: &EarningsSummary, forecast_fragment: &str) -> String {
    format!(
        "📊 *YOUR EARNINGS ANALYSIS*\n\nBased on {} months of data:\n\n• *Average:* ₹{}/month\n• *Highest:* ₹{}\n• *Lowest:* ₹{}\n\n{}\n\nReply *menu* to see all options.",
        summary.months,
        format_inr(summary.average),
        format_inr(summary.highest.round() as i64),
        format_inr(summary.lowest.round() as i64),
        forecast_fragment
    )
}

/// Fragment used when only the forecast lookup failed
pub fn forecast_unavailable_fragment() -> String {
    "(⚠️ Advanced forecast temporarily unavailable)".to_string()
}

/// GigScore breakdown with the qualitative stability label
pub fn credit_report(score: u32, month_count: u32, volatility: Option<f64>) -> String {
    let stability = match volatility {
        Some(v) if v < STABILITY_THRESHOLD => "Good",
        _ => "Needs Improvement",
    };
    format!(
        "💳 *YOUR GIGSCORE: {}/850*\n\n*Breakdown:*\n• *History:* {} months\n• *Stability:* {}\n\n*To improve your score:*\n• Maintain consistent earnings\n• Build longer history",
        score, month_count, stability
    )
}

pub fn goals_menu() -> String {
    "🎯 *FINANCIAL GOALS SETTING*\n\nWhat would you like to save for?\n\n1. 🏥 Emergency Fund\n2. 🛵 Vehicle Upgrade\n3. 📚 Skill Development\n4. 🏠 Long-term Savings\n5. 🎉 Special Occasion\n\nReply *menu* to go back.".to_string()
}

pub fn emergency_menu() -> String {
    "🆘 *EMERGENCY SUPPORT*\n\nHere are your options:\n\n1. 💰 Use Existing Savings\n2. 📱 GigCredit Instant Loan\n3. ⚡ Platform Advance\n4. 🤝 Community Support\n\nFor GigCredit, you need a GigScore above 400.\n\nReply *menu* to go back.".to_string()
}

pub fn tips() -> String {
    "💡 *GIG ECONOMY TIPS*\n\n1. 💰 Save 25% of good months for lean periods.\n2. 📊 Track all earnings across platforms.\n3. 🏥 Build an emergency fund (3 months of expenses).\n4. 🛵 Maintain your vehicle - it's your primary asset.\n\nReply *menu* to go back.".to_string()
}

pub fn main_menu() -> String {
    "↩️ *Main Menu*\n\n1. 📊 Earnings Forecast\n2. 🎯 Financial Goals\n3. 🆘 Emergency Loans\n4. 💳 Credit Score\n5. 💡 Financial Tips".to_string()
}

/// Default reply for unrecognized input
pub fn fallback() -> String {
    "🤔 I'm not sure what you mean. Here's what I can help with:\n\n1. 📊 Earnings Forecast\n2. 🎯 Financial Goals\n3. 🆘 Emergency Loans\n4. 💳 Credit Score\n5. 💡 Financial Tips\n\n*Reply with 1-5* or say *hi* to start over.".to_string()
}

/// Apology sent when the data store let us down
pub fn trouble() -> String {
    "Sorry, I am having trouble right now.".to_string()
}

/// Apology specific to the credit intent
pub fn credit_unavailable() -> String {
    "Sorry, I cannot calculate your credit score right now.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcomes_list_same_five_options() {
        for text in [welcome_new(), welcome_returning()] {
            for n in 1..=5 {
                assert!(text.contains(&format!("{}.", n)), "missing option {}", n);
            }
        }
    }

    #[test]
    fn test_earnings_analysis_embeds_figures() {
        let summary = EarningsSummary {
            months: 4,
            average: 21500,
            highest: 30000.0,
            lowest: 12000.0,
        };
        let text = earnings_analysis(&summary, "FRAGMENT");
        assert!(text.contains("4 months"));
        assert!(text.contains("₹21,500/month"));
        assert!(text.contains("₹30,000"));
        assert!(text.contains("₹12,000"));
        assert!(text.contains("FRAGMENT"));
    }

    #[test]
    fn test_credit_report_stability_label() {
        let good = credit_report(550, 10, Some(5_000.0));
        assert!(good.contains("Stability:* Good"));
        assert!(good.contains("550/850"));

        let shaky = credit_report(500, 10, Some(20_000.0));
        assert!(shaky.contains("Needs Improvement"));

        // No volatility sample never reads as stable
        let sparse = credit_report(320, 1, None);
        assert!(sparse.contains("Needs Improvement"));
    }
}
