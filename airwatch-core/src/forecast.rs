//! Short-Horizon Polynomial Forecasting
//!
//! ## Overview
//!
//! The forecaster treats the window's positional index `0..N-1` as the
//! independent variable and fits one least-squares polynomial per metric.
//! Each fit is extrapolated at `N..N+predict_points-1`, and the future
//! points are stamped `last_timestamp + (i + 1) * update_interval`.
//!
//! ## Least Squares
//!
//! For degree `d` the fit minimises `Σ (yᵢ - p(xᵢ))²` over polynomials of
//! degree `d`. With the Vandermonde design matrix `X` this is the solution
//! of the normal equations:
//!
//! ```text
//! (XᵀX) β = Xᵀy        XᵀX[j][k] = Σ xᵢ^(j+k)     Xᵀy[j] = Σ xᵢ^j · yᵢ
//! ```
//!
//! Raw indices make `XᵀX` badly conditioned for large windows (`1000⁴` next
//! to `1`), so the index axis is first centred and scaled onto `[-1, 1]`:
//!
//! ```text
//! x' = (x - c) / s      c = (N - 1) / 2      s = max(c, 1)
//! ```
//!
//! A polynomial in `x'` spans the same space as one in `x`, so the fitted
//! curve is identical; only the coefficients differ. The system is solved by
//! Gaussian elimination with partial pivoting in `f64`.
//!
//! ## Warm-Up
//!
//! At least `max(5, degree + 2)` readings are required. Below that the
//! forecaster returns `InsufficientData` and the caller shows the window
//! without predictions.
//!
//! ## Usage Example
//!
//! ```rust
//! use airwatch_core::{ForecastConfig, Forecaster, Metric, Reading};
//!
//! let window: Vec<Reading> = (0..10u64)
//!     .map(|i| Reading::new(i * 5_000, 20.0, 40.0 + i as f64, 150))
//!     .collect();
//!
//! let forecaster = Forecaster::new(ForecastConfig::default().with_predict_points(3))?;
//! let forecast = forecaster.forecast(&window)?;
//!
//! assert_eq!(forecast.len(), 3);
//! assert!((forecast.values(Metric::Temperature)[0] - 20.0).abs() < 1e-9);
//! assert_eq!(forecast.timestamps[0], 50_000);
//! # Ok::<(), airwatch_core::MonitorError>(())
//! ```

use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::defaults::{
        DEFAULT_POLYNOMIAL_DEGREE, DEFAULT_PREDICT_POINTS, DEFAULT_UPDATE_INTERVAL_SECS,
        MAX_POLYNOMIAL_DEGREE, MIN_FORECAST_SAMPLES,
    },
    errors::{MonitorError, MonitorResult},
    reading::{Metric, Reading},
    time::{secs_to_ms, Timestamp},
};

// Relative pivot size below which the normal equations are treated as singular
const SINGULAR_PIVOT_EPSILON: f64 = 1e-12;

/// Forecaster settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForecastConfig {
    /// Number of future points per metric
    pub predict_points: usize,
    /// Polynomial degree (`1..=MAX_POLYNOMIAL_DEGREE`)
    pub degree: usize,
    /// Nominal sampling interval used to stamp future points
    pub update_interval_secs: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            predict_points: DEFAULT_PREDICT_POINTS,
            degree: DEFAULT_POLYNOMIAL_DEGREE,
            update_interval_secs: DEFAULT_UPDATE_INTERVAL_SECS,
        }
    }
}

impl ForecastConfig {
    /// Set the forecast horizon
    pub fn with_predict_points(mut self, points: usize) -> Self {
        self.predict_points = points;
        self
    }

    /// Set the polynomial degree
    pub fn with_degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    /// Set the nominal sampling interval
    pub fn with_update_interval_secs(mut self, secs: f64) -> Self {
        self.update_interval_secs = secs;
        self
    }

    /// Reject values the forecaster cannot work with
    pub fn validate(&self) -> MonitorResult<()> {
        if self.predict_points == 0 {
            return Err(MonitorError::invalid("predict_points", "must be a positive integer"));
        }
        if self.degree == 0 {
            return Err(MonitorError::invalid("degree", "must be at least 1"));
        }
        if self.degree > MAX_POLYNOMIAL_DEGREE {
            return Err(MonitorError::invalid("degree", "exceeds the maximum polynomial degree"));
        }
        if !self.update_interval_secs.is_finite() || self.update_interval_secs <= 0.0 {
            return Err(MonitorError::invalid(
                "update_interval_secs",
                "must be a positive number of seconds",
            ));
        }
        Ok(())
    }

    /// Fewest readings a fit of this degree accepts
    pub fn required_samples(&self) -> usize {
        MIN_FORECAST_SAMPLES.max(self.degree.saturating_add(2))
    }
}

/// Least-squares polynomial over a centred, scaled index axis
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolynomialFit {
    /// Coefficients in ascending powers of `(x - center) / scale`
    coefficients: Vec<f64>,
    center: f64,
    scale: f64,
}

impl PolynomialFit {
    /// Fit `values[i]` against `i` with a polynomial of the given degree
    ///
    /// Requires more points than coefficients; callers normally go through
    /// `Forecaster`, which enforces the warm-up minimum first.
    pub fn fit(values: &[f64], degree: usize) -> MonitorResult<Self> {
        let n = values.len();
        let Some(terms) = degree.checked_add(1) else {
            return Err(MonitorError::invalid("degree", "exceeds the maximum polynomial degree"));
        };
        if n <= terms {
            return Err(MonitorError::InsufficientData {
                required: terms.saturating_add(1),
                available: n,
            });
        }

        let center = (n - 1) as f64 / 2.0;
        let scale = center.max(1.0);

        // Power sums Σ x'^k for k in 0..=2d, and moments Σ x'^j · y.
        // degree < n here, so 2d + 1 cannot overflow.
        let mut power_sums = vec![0.0; 2 * degree + 1];
        let mut moments = vec![0.0; terms];
        for (i, &y) in values.iter().enumerate() {
            let x = (i as f64 - center) / scale;
            let mut power = 1.0;
            for (k, sum) in power_sums.iter_mut().enumerate() {
                *sum += power;
                if k < terms {
                    moments[k] += power * y;
                }
                power *= x;
            }
        }

        // Normal matrix is Hankel: entry (j, k) = Σ x'^(j+k)
        let mut matrix = vec![0.0; terms * terms];
        for j in 0..terms {
            for k in 0..terms {
                matrix[j * terms + k] = power_sums[j + k];
            }
        }

        let coefficients = solve_linear_system(&mut matrix, &mut moments, terms)?;

        Ok(Self {
            coefficients,
            center,
            scale,
        })
    }

    /// Evaluate the polynomial at a (possibly future) index
    pub fn evaluate(&self, index: f64) -> f64 {
        let x = (index - self.center) / self.scale;
        // Horner
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Degree of the fitted polynomial
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Coefficients in ascending powers of `(x - center()) / scale()`
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Centre of the index axis, `(N - 1) / 2`
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Scale of the index axis, `max(center, 1)`
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

/// Gaussian elimination with partial pivoting on a row-major square system
fn solve_linear_system(matrix: &mut [f64], rhs: &mut [f64], size: usize) -> MonitorResult<Vec<f64>> {
    let magnitude = matrix
        .iter()
        .fold(0.0_f64, |acc, &v| acc.max(libm::fabs(v)))
        .max(1.0);

    for col in 0..size {
        let pivot_row = (col..size)
            .max_by(|&a, &b| {
                libm::fabs(matrix[a * size + col])
                    .partial_cmp(&libm::fabs(matrix[b * size + col]))
                    .unwrap_or(core::cmp::Ordering::Equal)
            })
            .unwrap_or(col);

        let pivot = matrix[pivot_row * size + col];
        if !(libm::fabs(pivot) > SINGULAR_PIVOT_EPSILON * magnitude) {
            log_warn!("normal equations are singular at column {}", col);
            return Err(MonitorError::invalid(
                "degree",
                "polynomial fit is underdetermined for this window",
            ));
        }

        if pivot_row != col {
            for k in 0..size {
                matrix.swap(col * size + k, pivot_row * size + k);
            }
            rhs.swap(col, pivot_row);
        }

        for row in (col + 1)..size {
            let factor = matrix[row * size + col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..size {
                matrix[row * size + k] -= factor * matrix[col * size + k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut solution = vec![0.0; size];
    for row in (0..size).rev() {
        let tail: f64 = ((row + 1)..size)
            .map(|k| matrix[row * size + k] * solution[k])
            .sum();
        solution[row] = (rhs[row] - tail) / matrix[row * size + row];
    }

    Ok(solution)
}

/// One extrapolated value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForecastPoint {
    /// Position on the window's index axis (`N`, `N + 1`, ...)
    pub future_index: usize,
    /// Extrapolated metric value
    pub predicted_value: f64,
}

/// Forecast for a single metric
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetricForecast {
    /// Forecast metric
    pub metric: Metric,
    /// Future points, nearest first
    pub points: Vec<ForecastPoint>,
    /// Fit the points were extrapolated from
    pub fit: PolynomialFit,
}

impl MetricForecast {
    /// Predicted values, nearest first
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted_value).collect()
    }
}

/// Independent forecasts for all three metrics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForecastResult {
    /// Synthesized timestamps of the future points
    pub timestamps: Vec<Timestamp>,
    /// Per-metric forecasts in `Metric::ALL` order
    pub metrics: [MetricForecast; 3],
}

impl ForecastResult {
    /// Forecast for one metric
    pub fn metric(&self, metric: Metric) -> &MetricForecast {
        &self.metrics[metric.index()]
    }

    /// Predicted values for one metric
    pub fn values(&self, metric: Metric) -> Vec<f64> {
        self.metric(metric).values()
    }

    /// `(timestamp, value)` pairs for one metric, ready for charting
    pub fn series(&self, metric: Metric) -> Vec<(Timestamp, f64)> {
        self.timestamps
            .iter()
            .copied()
            .zip(self.metric(metric).points.iter().map(|p| p.predicted_value))
            .collect()
    }

    /// Forecast horizon
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the horizon is empty
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Fits and extrapolates the window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Forecaster {
    config: ForecastConfig,
}

impl Forecaster {
    /// Forecaster with a validated configuration
    pub fn new(config: ForecastConfig) -> MonitorResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast every metric from a window snapshot (oldest first)
    pub fn forecast(&self, window: &[Reading]) -> MonitorResult<ForecastResult> {
        let required = self.config.required_samples();
        let Some(last) = window.last().filter(|_| window.len() >= required) else {
            return Err(MonitorError::InsufficientData {
                required,
                available: window.len(),
            });
        };

        let n = window.len();
        let horizon = self.config.predict_points;

        let timestamps = (0..horizon)
            .map(|i| {
                let offset = secs_to_ms((i + 1) as f64 * self.config.update_interval_secs);
                last.timestamp.saturating_add(offset)
            })
            .collect();

        let [temperature, humidity, air_quality] = Metric::ALL;
        let metrics = [
            self.forecast_metric(window, temperature, n, horizon)?,
            self.forecast_metric(window, humidity, n, horizon)?,
            self.forecast_metric(window, air_quality, n, horizon)?,
        ];

        log_debug!(
            "forecast {} points from {} readings (degree {})",
            horizon,
            n,
            self.config.degree
        );

        Ok(ForecastResult {
            timestamps,
            metrics,
        })
    }

    fn forecast_metric(
        &self,
        window: &[Reading],
        metric: Metric,
        n: usize,
        horizon: usize,
    ) -> MonitorResult<MetricForecast> {
        let values: Vec<f64> = window.iter().map(|r| r.value(metric)).collect();
        let fit = PolynomialFit::fit(&values, self.config.degree)?;

        let points = (n..n.saturating_add(horizon))
            .map(|future_index| ForecastPoint {
                future_index,
                predicted_value: fit.evaluate(future_index as f64),
            })
            .collect();

        Ok(MetricForecast {
            metric,
            points,
            fit,
        })
    }
}
