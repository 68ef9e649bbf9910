//! Ordinary least-squares trend lines over annual series

use crate::error::{ProjectionError, Result};
use crate::series::TimeSeriesPoint;

/// Fitted line `value = slope * year + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub sample_count: usize,
}

impl LinearFit {
    /// Closed-form least squares fit over every point of `series`
    ///
    /// # Errors
    /// `InsufficientData` for fewer than two points, `DegenerateComputation`
    /// when all points share one year (zero denominator).
    pub fn fit(series: &[TimeSeriesPoint]) -> Result<Self> {
        if series.len() < 2 {
            return Err(ProjectionError::InsufficientData {
                required: 2,
                available: series.len(),
            });
        }

        let n = series.len() as f64;
        let (sum_x, sum_y, sum_xy, sum_x2) = series.iter().fold(
            (0.0, 0.0, 0.0, 0.0),
            |(sx, sy, sxy, sx2), p| {
                let x = f64::from(p.year);
                (sx + x, sy + p.value, sxy + x * p.value, sx2 + x * x)
            },
        );

        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator.abs() < 1e-12 {
            return Err(ProjectionError::degenerate(
                "trend line needs at least two distinct years",
            ));
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Ok(Self {
            slope,
            intercept,
            sample_count: series.len(),
        })
    }

    /// Fitted value at `year`
    pub fn value_at(&self, year: i32) -> f64 {
        self.slope * f64::from(year) + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::series_from_pairs;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_line() {
        let series = series_from_pairs(&[(2010, 10.0), (2015, 12.0), (2020, 14.0)]);
        let fit = LinearFit::fit(&series).unwrap();
        assert_relative_eq!(fit.slope, 0.4, epsilon = 1e-9);
        assert_relative_eq!(fit.value_at(2025), 16.0, epsilon = 1e-9);
        assert_eq!(fit.sample_count, 3);
    }

    #[test]
    fn test_noisy_points() {
        // Residuals +1, -2, +1 around y = 2x - 4000 cancel out
        let series = series_from_pairs(&[(2000, 1.0), (2001, 0.0), (2002, 5.0)]);
        let fit = LinearFit::fit(&series).unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-9);
        assert_relative_eq!(fit.value_at(2001), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_year_is_degenerate() {
        let series = series_from_pairs(&[(2020, 1.0), (2020, 2.0), (2020, 3.0)]);
        assert!(matches!(
            LinearFit::fit(&series),
            Err(ProjectionError::DegenerateComputation(_))
        ));
    }

    #[test]
    fn test_too_few_points() {
        let series = series_from_pairs(&[(2020, 1.0)]);
        assert!(matches!(
            LinearFit::fit(&series),
            Err(ProjectionError::InsufficientData { required: 2, available: 1 })
        ));
    }
}
