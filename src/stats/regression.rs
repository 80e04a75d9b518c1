//! Regression Calculator Module
//! Ordinary least squares fits behind the scatterplot trendlines.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Confidence level of the band drawn around the trendline
pub const CONFIDENCE_LEVEL: f64 = 0.95;

/// Least squares fit of y on x.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r: f64,
    pub r_squared: f64,
    pub n: usize,
    pub p_value: Option<f64>,
    x_mean: f64,
    sxx: f64,
    residual_se: f64,
    t_critical: Option<f64>,
}

impl LinearFit {
    /// Fitted value at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Confidence interval of the fitted mean at `x`, if there are enough
    /// points (n > 2) to estimate it.
    pub fn confidence_interval(&self, x: f64) -> Option<(f64, f64)> {
        let t = self.t_critical?;
        let se = self.residual_se
            * (1.0 / self.n as f64 + (x - self.x_mean).powi(2) / self.sxx).sqrt();
        let y = self.predict(x);
        Some((y - t * se, y + t * se))
    }

    /// Sampled trendline with its band: `(x, y, lower, upper)`.
    pub fn band(&self, x_min: f64, x_max: f64, samples: usize) -> Vec<(f64, f64, f64, f64)> {
        let samples = samples.max(2);
        let step = (x_max - x_min) / (samples - 1) as f64;
        (0..samples)
            .map(|i| {
                let x = x_min + i as f64 * step;
                let y = self.predict(x);
                let (lo, hi) = self.confidence_interval(x).unwrap_or((y, y));
                (x, y, lo, hi)
            })
            .collect()
    }

    pub fn summary(&self) -> String {
        let p = self
            .p_value
            .map(|p| format!("{:.4}", p))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "y = {:.3}x + {:.3}   r = {:.3}   r² = {:.3}   p = {}   n = {}",
            self.slope, self.intercept, self.r, self.r_squared, p, self.n
        )
    }
}

pub struct RegressionCalculator;

impl RegressionCalculator {
    /// Fit y on x. Non-finite pairs are skipped. `None` when fewer than two
    /// points remain or x has no spread.
    pub fn fit(points: &[(f64, f64)]) -> Option<LinearFit> {
        let clean: Vec<(f64, f64)> = points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        let n = clean.len();
        if n < 2 {
            return None;
        }

        let nf = n as f64;
        let x_mean = clean.iter().map(|(x, _)| x).sum::<f64>() / nf;
        let y_mean = clean.iter().map(|(_, y)| y).sum::<f64>() / nf;

        let sxx: f64 = clean.iter().map(|(x, _)| (x - x_mean).powi(2)).sum();
        let syy: f64 = clean.iter().map(|(_, y)| (y - y_mean).powi(2)).sum();
        let sxy: f64 = clean
            .iter()
            .map(|(x, y)| (x - x_mean) * (y - y_mean))
            .sum();

        if sxx == 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;
        let r = if syy == 0.0 {
            0.0
        } else {
            sxy / (sxx * syy).sqrt()
        };

        let sse: f64 = clean
            .iter()
            .map(|(x, y)| (y - (intercept + slope * x)).powi(2))
            .sum();

        // Residual-based inference needs at least one degree of freedom
        let (residual_se, t_critical, p_value) = if n > 2 {
            let dof = nf - 2.0;
            let residual_se = (sse / dof).sqrt();
            match StudentsT::new(0.0, 1.0, dof) {
                Ok(dist) => {
                    let t_critical = dist.inverse_cdf(0.5 + CONFIDENCE_LEVEL / 2.0);
                    let slope_se = residual_se / sxx.sqrt();
                    // Zero residuals: p is 0 for a sloped line and 1 for a flat one
                    let p_value = if slope_se > 0.0 {
                        2.0 * (1.0 - dist.cdf((slope / slope_se).abs()))
                    } else if slope != 0.0 {
                        0.0
                    } else {
                        1.0
                    };
                    (residual_se, Some(t_critical), Some(p_value))
                }
                Err(_) => (residual_se, None, None),
            }
        } else {
            (0.0, None, None)
        };

        Some(LinearFit {
            slope,
            intercept,
            r,
            r_squared: r * r,
            n,
            p_value,
            x_mean,
            sxx,
            residual_se,
            t_critical,
        })
    }
}
