//! GigScore computation
//!
//! The score is a creditworthiness proxy bounded to [300, 850], built
//! from two signals: how long an earnings history exists, and how stable
//! it is. The constants below are tunable policy, not derived formulas;
//! they are the product's behavioral contract and changing them changes
//! every user's score.

use crate::error::{Error, Result};
use crate::models::ScoreInputs;

/// Score floor; also the exact score for a user with no history
pub const BASE_SCORE: u32 = 300;

/// Points granted per recorded month
pub const HISTORY_BONUS_PER_MONTH: u32 = 20;

/// Cap on the history bonus
pub const HISTORY_BONUS_CAP: u32 = 200;

/// Flat bonus for a stable income
pub const STABILITY_BONUS: u32 = 50;

/// Volatility below this earns the stability bonus
pub const STABILITY_THRESHOLD: f64 = 10_000.0;

/// Score ceiling
pub const MAX_SCORE: u32 = 850;

/// Compute the GigScore from history length and volatility.
///
/// A user with no history scores exactly [`BASE_SCORE`]; no bonuses
/// apply. Volatility is `None` when the series has fewer than 2 points,
/// which never earns the stability bonus.
pub fn compute_gig_score(month_count: u32, volatility: Option<f64>) -> Result<u32> {
    if let Some(v) = volatility {
        if !v.is_finite() || v < 0.0 {
            return Err(Error::InvalidInput(format!(
                "volatility must be a finite non-negative number, got {}",
                v
            )));
        }
    }

    if month_count == 0 {
        return Ok(BASE_SCORE);
    }

    let history_bonus = (month_count.saturating_mul(HISTORY_BONUS_PER_MONTH)).min(HISTORY_BONUS_CAP);
    let mut score = BASE_SCORE + history_bonus;

    if matches!(volatility, Some(v) if v < STABILITY_THRESHOLD) {
        score += STABILITY_BONUS;
    }

    Ok(score.min(MAX_SCORE))
}

/// Derive [`ScoreInputs`] from an earnings series
pub fn score_inputs(amounts: &[f64]) -> ScoreInputs {
    ScoreInputs {
        month_count: amounts.len() as u32,
        volatility: volatility(amounts),
    }
}

/// Population standard deviation of a series; `None` with fewer than 2
/// points
pub fn volatility(amounts: &[f64]) -> Option<f64> {
    if amounts.len() < 2 {
        return None;
    }
    let n = amounts.len() as f64;
    let mean = amounts.iter().sum::<f64>() / n;
    let variance = amounts.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_history_is_exactly_base() {
        assert_eq!(compute_gig_score(0, None).unwrap(), 300);
        // Even a (nonsensical) stable volatility earns nothing without history
        assert_eq!(compute_gig_score(0, Some(0.0)).unwrap(), 300);
    }

    #[test]
    fn test_history_bonus_caps_at_200() {
        // 10 months hits the cap exactly
        assert_eq!(compute_gig_score(10, None).unwrap(), 500);
        assert_eq!(compute_gig_score(25, None).unwrap(), 500);
    }

    #[test]
    fn test_stability_bonus() {
        assert_eq!(compute_gig_score(3, Some(5_000.0)).unwrap(), 410);
        // At or above the threshold: no bonus
        assert_eq!(compute_gig_score(3, Some(10_000.0)).unwrap(), 360);
        assert_eq!(compute_gig_score(3, Some(25_000.0)).unwrap(), 360);
        // Single-sample series has no volatility and no bonus
        assert_eq!(compute_gig_score(1, None).unwrap(), 320);
    }

    #[test]
    fn test_bounds_hold_everywhere() {
        for months in 0..40 {
            for vol in [None, Some(0.0), Some(9_999.9), Some(1e9)] {
                let score = compute_gig_score(months, vol).unwrap();
                assert!((300..=850).contains(&score), "score {} out of bounds", score);
            }
        }
    }

    #[test]
    fn test_monotonic_in_month_count() {
        for vol in [None, Some(500.0), Some(50_000.0)] {
            let mut prev = 0;
            for months in 0..30 {
                let score = compute_gig_score(months, vol).unwrap();
                assert!(score >= prev);
                prev = score;
            }
        }
    }

    #[test]
    fn test_invalid_volatility_rejected() {
        assert!(compute_gig_score(3, Some(f64::NAN)).is_err());
        assert!(compute_gig_score(3, Some(f64::INFINITY)).is_err());
        assert!(compute_gig_score(3, Some(-1.0)).is_err());
    }

    #[test]
    fn test_volatility_is_population_stddev() {
        assert_eq!(volatility(&[]), None);
        assert_eq!(volatility(&[42.0]), None);
        // [2, 4] -> mean 3, population variance 1, stddev 1
        assert_eq!(volatility(&[2.0, 4.0]), Some(1.0));
        // Constant series is perfectly stable
        assert_eq!(volatility(&[7.0, 7.0, 7.0]), Some(0.0));
    }

    #[test]
    fn test_score_inputs() {
        let inputs = score_inputs(&[10_000.0, 12_000.0, 11_000.0]);
        assert_eq!(inputs.month_count, 3);
        assert!(inputs.volatility.unwrap() > 0.0);

        let empty = score_inputs(&[]);
        assert_eq!(empty.month_count, 0);
        assert_eq!(empty.volatility, None);
    }
}
