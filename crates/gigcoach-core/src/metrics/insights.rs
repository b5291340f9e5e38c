//! Rule-based earnings insights
//!
//! Three fixed rules over the earnings series, emitted in a fixed order:
//! trend (last vs previous), last vs series average, and a volatility
//! warning. Ratio rules guard their denominators explicitly; an insight
//! is skipped rather than producing NaN.

use super::score::volatility;

/// Shown instead of insights when the series has fewer than 2 points
pub const INSUFFICIENT_DATA_MESSAGE: &str = "Add more earnings data to unlock AI insights!";

/// Volatility above this fraction of the mean triggers the warning
const VOLATILITY_WARNING_RATIO: f64 = 0.4;

/// Generate textual insights for an earnings series (date ascending).
///
/// Always returns at least one message: the insufficient-data fallback
/// below 2 points, the average-comparison insight otherwise.
pub fn generate_insights(earnings: &[f64]) -> Vec<String> {
    if earnings.len() < 2 {
        return vec![INSUFFICIENT_DATA_MESSAGE.to_string()];
    }

    let mut insights = Vec::new();

    let last = earnings[earnings.len() - 1];
    let prev = earnings[earnings.len() - 2];

    // Trend: skipped when the previous period is zero
    if prev != 0.0 {
        let change = ((last - prev).abs() / prev * 100.0).round();
        if last > prev {
            insights.push(format!(
                "Great work! Your earnings last month were up {}% from the month before.",
                change
            ));
        } else {
            insights.push(format!(
                "Watch out! Your earnings last month were down {}% from the month before. Consider working peak hours.",
                change
            ));
        }
    }

    let mean = earnings.iter().sum::<f64>() / earnings.len() as f64;
    if last > mean {
        insights.push(
            "You're on a roll! Last month's income was higher than your average. Perfect time to save for a goal."
                .to_string(),
        );
    } else {
        insights.push(
            "Last month was a bit slow compared to your average. Remember to stick to your budget."
                .to_string(),
        );
    }

    // Volatility flag: skipped when the mean is zero
    if mean != 0.0 {
        if let Some(std_dev) = volatility(earnings) {
            if std_dev > mean * VOLATILITY_WARNING_RATIO {
                insights.push(
                    "Your income is highly volatile. Building a 3-month emergency fund should be your top priority."
                        .to_string(),
                );
            }
        }
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data() {
        assert_eq!(generate_insights(&[]), vec![INSUFFICIENT_DATA_MESSAGE]);
        assert_eq!(
            generate_insights(&[5000.0]),
            vec![INSUFFICIENT_DATA_MESSAGE]
        );
    }

    #[test]
    fn test_positive_trend_percentage() {
        let insights = generate_insights(&[100.0, 150.0]);
        assert!(insights[0].contains("up 50%"), "got: {}", insights[0]);
    }

    #[test]
    fn test_negative_trend_percentage() {
        let insights = generate_insights(&[200.0, 150.0]);
        assert!(insights[0].contains("down 25%"), "got: {}", insights[0]);
    }

    #[test]
    fn test_trend_skipped_when_prev_is_zero() {
        let insights = generate_insights(&[100.0, 0.0, 150.0]);
        // No trend message; first insight is the average comparison
        assert!(!insights[0].contains('%'));
        assert!(!insights.is_empty());
    }

    #[test]
    fn test_average_comparison_messages() {
        // Last above average
        let insights = generate_insights(&[100.0, 100.0, 400.0]);
        assert!(insights
            .iter()
            .any(|i| i.contains("higher than your average")));

        // Last below average
        let insights = generate_insights(&[400.0, 400.0, 100.0]);
        assert!(insights.iter().any(|i| i.contains("a bit slow")));
    }

    #[test]
    fn test_volatility_warning_triggers() {
        // Population stddev of [100, 1000] is 450, mean is 550; 450 > 220
        let insights = generate_insights(&[100.0, 1000.0]);
        assert!(insights.iter().any(|i| i.contains("highly volatile")));
    }

    #[test]
    fn test_volatility_warning_absent_for_steady_series() {
        let insights = generate_insights(&[1000.0, 1010.0, 990.0]);
        assert!(!insights.iter().any(|i| i.contains("highly volatile")));
    }

    #[test]
    fn test_all_zero_series_does_not_panic() {
        // mean == 0 skips the volatility ratio; prev == 0 skips the trend
        let insights = generate_insights(&[0.0, 0.0]);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].contains("a bit slow"));
    }

    #[test]
    fn test_fixed_order() {
        let insights = generate_insights(&[100.0, 1000.0]);
        assert_eq!(insights.len(), 3);
        assert!(insights[0].contains("up "));
        assert!(insights[1].contains("higher than your average"));
        assert!(insights[2].contains("highly volatile"));
    }
}
