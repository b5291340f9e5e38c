//! Progressive tax estimate
//!
//! The engine assumes its inputs are already restricted to the fiscal
//! window; the database facade applies the date filter.

use serde::{Deserialize, Serialize};

use crate::config::TaxConfig;
use crate::error::{Error, Result};

/// Result of a tax estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxEstimate {
    pub gross_income: f64,
    pub total_deductions: f64,
    pub taxable_income: f64,
    /// Rounded to the nearest whole unit
    pub estimated_tax: i64,
}

/// Estimate tax owed on `gross_income` less `deductions`, using the
/// configured marginal schedule.
///
/// Taxable income floors at zero; each bracket's rate applies only to
/// the slice of income above its threshold, so the estimate is
/// continuous at every bracket boundary and non-decreasing in income.
pub fn estimate_tax(gross_income: f64, deductions: f64, config: &TaxConfig) -> Result<TaxEstimate> {
    if !gross_income.is_finite() || gross_income < 0.0 {
        return Err(Error::InvalidInput(format!(
            "gross_income must be a finite non-negative number, got {}",
            gross_income
        )));
    }
    if !deductions.is_finite() || deductions < 0.0 {
        return Err(Error::InvalidInput(format!(
            "deductions must be a finite non-negative number, got {}",
            deductions
        )));
    }

    let taxable_income = (gross_income - deductions).max(0.0);

    let mut tax = 0.0;
    for (i, bracket) in config.brackets.iter().enumerate() {
        if taxable_income <= bracket.over {
            break;
        }
        let upper = config
            .brackets
            .get(i + 1)
            .map(|next| next.over)
            .unwrap_or(f64::INFINITY);
        tax += bracket.rate * (taxable_income.min(upper) - bracket.over);
    }

    Ok(TaxEstimate {
        gross_income,
        total_deductions: deductions,
        taxable_income,
        estimated_tax: tax.round() as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TaxConfig {
        TaxConfig::default()
    }

    #[test]
    fn test_zero_band() {
        assert_eq!(estimate_tax(0.0, 0.0, &config()).unwrap().estimated_tax, 0);
        assert_eq!(
            estimate_tax(300_000.0, 0.0, &config()).unwrap().estimated_tax,
            0
        );
    }

    #[test]
    fn test_documented_bracket_sums() {
        // 5% of the 300k-600k band
        assert_eq!(
            estimate_tax(600_000.0, 0.0, &config()).unwrap().estimated_tax,
            15_000
        );
        // 5% of first band + 10% of second
        assert_eq!(
            estimate_tax(900_000.0, 0.0, &config()).unwrap().estimated_tax,
            45_000
        );
        // + 15% of third
        assert_eq!(
            estimate_tax(1_200_000.0, 0.0, &config()).unwrap().estimated_tax,
            90_000
        );
        // + 20% on the excess
        assert_eq!(
            estimate_tax(1_500_000.0, 0.0, &config()).unwrap().estimated_tax,
            150_000
        );
    }

    #[test]
    fn test_deductions_floor_at_zero() {
        let estimate = estimate_tax(100_000.0, 250_000.0, &config()).unwrap();
        assert_eq!(estimate.taxable_income, 0.0);
        assert_eq!(estimate.estimated_tax, 0);
    }

    #[test]
    fn test_continuous_at_boundaries() {
        let config = config();
        for boundary in [300_000.0, 600_000.0, 900_000.0, 1_200_000.0] {
            let below = estimate_tax(boundary - 1.0, 0.0, &config).unwrap();
            let above = estimate_tax(boundary + 1.0, 0.0, &config).unwrap();
            // No jump larger than the marginal rate on the 2-unit step
            assert!((above.estimated_tax - below.estimated_tax) <= 1);
        }
    }

    #[test]
    fn test_monotonic_in_income() {
        let config = config();
        let mut prev = 0;
        for income in (0..2_000_000).step_by(50_000) {
            let estimate = estimate_tax(income as f64, 0.0, &config).unwrap();
            assert!(estimate.estimated_tax >= prev);
            prev = estimate.estimated_tax;
        }
    }

    #[test]
    fn test_rounds_to_nearest_unit() {
        // taxable 300_009 -> 0.05 * 9 = 0.45 -> 0
        assert_eq!(
            estimate_tax(300_009.0, 0.0, &config()).unwrap().estimated_tax,
            0
        );
        // taxable 300_010 -> 0.50 -> rounds to 1 (round half away from zero)
        assert_eq!(
            estimate_tax(300_010.0, 0.0, &config()).unwrap().estimated_tax,
            1
        );
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let config = config();
        assert!(estimate_tax(-1.0, 0.0, &config).is_err());
        assert!(estimate_tax(0.0, -1.0, &config).is_err());
        assert!(estimate_tax(f64::NAN, 0.0, &config).is_err());
        assert!(estimate_tax(0.0, f64::INFINITY, &config).is_err());
    }
}
