//! Forecast adapter
//!
//! The forecasting model runs elsewhere and writes its prediction into
//! the store; this adapter only turns the latest stored value into a
//! savings suggestion. No forecasting math happens here.

use serde::{Deserialize, Serialize};

use crate::models::Forecast;
use crate::money::format_inr;

/// Fraction of the predicted amount suggested as savings
pub const SUGGESTED_SAVINGS_RATE: f64 = 0.25;

/// Fragment used while no forecast has been produced yet
pub const NO_FORECAST_FRAGMENT: &str =
    "(📊 I'm still learning your patterns. A detailed forecast will be ready soon!)";

/// A savings suggestion derived from the latest forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSuggestion {
    /// Ready-to-embed chat fragment
    pub message_fragment: String,
    /// Whole-unit savings suggestion; 0 without a forecast
    pub suggested_saving: i64,
    /// The prediction the suggestion was derived from, if any
    pub predicted_amount: Option<f64>,
}

/// Derive the savings suggestion from the latest forecast, if any
pub fn forecast_suggestion(latest: Option<&Forecast>) -> ForecastSuggestion {
    match latest {
        None => ForecastSuggestion {
            message_fragment: NO_FORECAST_FRAGMENT.to_string(),
            suggested_saving: 0,
            predicted_amount: None,
        },
        Some(forecast) => {
            let suggested_saving = (forecast.predicted_amount * SUGGESTED_SAVINGS_RATE).round() as i64;
            let predicted = forecast.predicted_amount.round() as i64;
            ForecastSuggestion {
                message_fragment: format!(
                    "🔮 *AI Forecast:* ₹{}\n💡 *Smart Move:* Save ₹{} this month!",
                    format_inr(predicted),
                    format_inr(suggested_saving)
                ),
                suggested_saving,
                predicted_amount: Some(forecast.predicted_amount),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn forecast(predicted_amount: f64) -> Forecast {
        Forecast {
            id: 1,
            user_id: 1,
            predicted_amount,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_forecast() {
        let suggestion = forecast_suggestion(None);
        assert_eq!(suggestion.suggested_saving, 0);
        assert_eq!(suggestion.predicted_amount, None);
        assert_eq!(suggestion.message_fragment, NO_FORECAST_FRAGMENT);
    }

    #[test]
    fn test_quarter_of_prediction() {
        let suggestion = forecast_suggestion(Some(&forecast(10_000.0)));
        assert_eq!(suggestion.suggested_saving, 2_500);
        assert!(suggestion.message_fragment.contains("₹10,000"));
        assert!(suggestion.message_fragment.contains("₹2,500"));
    }

    #[test]
    fn test_rounding() {
        // 25% of 18,001 is 4,500.25 -> 4,500
        let suggestion = forecast_suggestion(Some(&forecast(18_001.0)));
        assert_eq!(suggestion.suggested_saving, 4_500);
    }

    #[test]
    fn test_locale_grouping_in_fragment() {
        let suggestion = forecast_suggestion(Some(&forecast(125_000.0)));
        assert!(suggestion.message_fragment.contains("₹1,25,000"));
        assert!(suggestion.message_fragment.contains("₹31,250"));
    }
}
