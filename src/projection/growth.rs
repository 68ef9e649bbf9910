//! Required compound annual growth rate
//!
//! The rate that, compounded for `years` periods, takes `current` to `target`.

use crate::error::{ProjectionError, Result};

/// Required annual growth rate, in percent
///
/// Computed as `100 * (10^(log10(target/current)/years) - 1)`.
///
/// # Errors
/// `InvalidInput` unless `current`, `target` and `years` are all positive.
pub fn required_growth(current: f64, target: f64, years: f64) -> Result<f64> {
    // Written as negated comparisons so NaN is rejected too
    if !(current > 0.0) || !(target > 0.0) || !(years > 0.0) {
        return Err(ProjectionError::invalid(format!(
            "required growth needs positive inputs (current={}, target={}, years={})",
            current, target, years
        )));
    }
    if !current.is_finite() || !target.is_finite() || !years.is_finite() {
        return Err(ProjectionError::invalid("required growth inputs must be finite"));
    }

    let rate = 100.0 * (10f64.powf((target / current).log10() / years) - 1.0);
    log::debug!(
        "required growth {:.4}% ({} -> {} over {} years)",
        rate, current, target, years
    );
    Ok(rate)
}

/// Value after compounding `rate_pct` percent per year for `years` years
pub fn compound(value: f64, rate_pct: f64, years: f64) -> f64 {
    value * (1.0 + rate_pct / 100.0).powf(years)
}
