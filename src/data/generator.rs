//! Synthetic Data Generator Module
//! Draws noisy samples of `y = x^1.5` and assembles them into a Polars table.

use crate::data::table::{X_COL, Y_COL};
use crate::error::{PlotterError, Result};
use polars::prelude::*;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use statrs::distribution::Normal;
use tracing::{debug, info};

/// Default number of samples per table
pub const DEFAULT_SAMPLES: usize = 100;
pub const DEFAULT_EXPONENT: f64 = 1.5;
pub const DEFAULT_NOISE_STD_DEV: f64 = 10.0;

/// Domain `[low, high)` from which `x` values are drawn.
///
/// Always satisfies `low < high` with both bounds finite; every constructor
/// validates before handing one out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    low: f64,
    high: f64,
}

impl Range {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if low.is_nan() || high.is_nan() {
            return Err(PlotterError::invalid("range bounds must be numeric"));
        }
        if !low.is_finite() || !high.is_finite() || !(high - low).is_finite() {
            return Err(PlotterError::invalid(format!(
                "range bounds must be finite, got ({low}, {high})"
            )));
        }
        if low >= high {
            return Err(PlotterError::invalid(format!(
                "invalid range: low ({low}) must be less than high ({high})"
            )));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Half-open membership test.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.low && x < self.high
    }
}

impl Default for Range {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 100.0,
        }
    }
}

impl TryFrom<(f64, f64)> for Range {
    type Error = PlotterError;

    fn try_from((low, high): (f64, f64)) -> Result<Self> {
        Range::new(low, high)
    }
}

impl TryFrom<[f64; 2]> for Range {
    type Error = PlotterError;

    fn try_from([low, high]: [f64; 2]) -> Result<Self> {
        Range::new(low, high)
    }
}

impl TryFrom<&[f64]> for Range {
    type Error = PlotterError;

    fn try_from(bounds: &[f64]) -> Result<Self> {
        match bounds {
            [low, high] => Range::new(*low, *high),
            _ => Err(PlotterError::invalid(format!(
                "range must be a pair of two numbers, got {} values",
                bounds.len()
            ))),
        }
    }
}

/// Generation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    pub samples: usize,
    pub exponent: f64,
    pub noise_std_dev: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            exponent: DEFAULT_EXPONENT,
            noise_std_dev: DEFAULT_NOISE_STD_DEV,
        }
    }
}

impl GeneratorConfig {
    pub fn with_samples(samples: usize) -> Self {
        Self {
            samples,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(PlotterError::invalid("sample count must be positive"));
        }
        if !self.exponent.is_finite() {
            return Err(PlotterError::invalid(format!(
                "exponent must be finite, got {}",
                self.exponent
            )));
        }
        if !(self.noise_std_dev.is_finite() && self.noise_std_dev > 0.0) {
            return Err(PlotterError::invalid(format!(
                "noise standard deviation must be positive, got {}",
                self.noise_std_dev
            )));
        }
        Ok(())
    }
}

/// Produces sorted sample tables from a validated config.
#[derive(Debug, Clone)]
pub struct DataGenerator {
    config: GeneratorConfig,
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }
}

impl DataGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate `config.samples` pairs with `x` uniform in `range` and
    /// `y = x^exponent + N(0, noise_std_dev)`, sorted ascending by `x`.
    pub fn generate<R: Rng + ?Sized>(&self, range: Range, rng: &mut R) -> Result<DataFrame> {
        let n = self.config.samples;
        info!(low = range.low(), high = range.high(), n, "generating samples");

        let uniform = Uniform::new(range.low(), range.high());
        let noise = Normal::new(0.0, self.config.noise_std_dev)
            .map_err(|e| PlotterError::invalid(format!("noise distribution: {e}")))?;

        let mut samples: Vec<(f64, f64)> = (0..n)
            .map(|_| {
                let x = uniform.sample(rng);
                let y = x.powf(self.config.exponent) + noise.sample(rng);
                (x, y)
            })
            .collect();

        samples.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (xs, ys): (Vec<f64>, Vec<f64>) = samples.into_iter().unzip();
        debug!(
            first_x = xs.first().copied(),
            last_x = xs.last().copied(),
            "samples sorted"
        );

        let df = DataFrame::new(vec![
            Column::new(X_COL.into(), xs),
            Column::new(Y_COL.into(), ys),
        ])?;

        Ok(df)
    }
}

/// Generate `n` samples over `range` with the default exponent and noise.
pub fn generate_data<R: Rng + ?Sized>(range: Range, n: usize, rng: &mut R) -> Result<DataFrame> {
    DataGenerator::new(GeneratorConfig::with_samples(n))?.generate(range, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::extract_points;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = Range::new(10.0, 5.0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(Range::new(3.0, 3.0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_range_rejects_nan_and_infinite() {
        assert!(Range::new(f64::NAN, 1.0).is_err());
        assert!(Range::new(0.0, f64::INFINITY).is_err());
        assert!(Range::new(-f64::MAX, f64::MAX).is_err());
    }

    #[test]
    fn test_range_from_slice_checks_arity() {
        let one: &[f64] = &[1.0];
        let three: &[f64] = &[0.0, 1.0, 2.0];
        let two: &[f64] = &[0.0, 50.0];

        assert!(Range::try_from(one).unwrap_err().is_invalid_argument());
        assert!(Range::try_from(three).unwrap_err().is_invalid_argument());
        assert_eq!(Range::try_from(two).unwrap(), Range::new(0.0, 50.0).unwrap());
    }

    #[test]
    fn test_range_contains_is_half_open() {
        let range = Range::new(0.0, 1.0).unwrap();
        assert!(range.contains(0.0));
        assert!(range.contains(0.999));
        assert!(!range.contains(1.0));
    }

    #[test]
    fn test_config_validation() {
        assert!(GeneratorConfig::default().validate().is_ok());
        assert!(GeneratorConfig::with_samples(0).validate().is_err());

        let bad_noise = GeneratorConfig {
            noise_std_dev: 0.0,
            ..GeneratorConfig::default()
        };
        assert!(DataGenerator::new(bad_noise).is_err());

        let bad_exponent = GeneratorConfig {
            exponent: f64::NAN,
            ..GeneratorConfig::default()
        };
        assert!(DataGenerator::new(bad_exponent).is_err());
    }

    #[test]
    fn test_generate_small_table() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = Range::new(0.0, 50.0).unwrap();
        let df = generate_data(range, 10, &mut rng).unwrap();

        assert_eq!(df.height(), 10);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, ["x", "y"]);

        let points = extract_points(&df).unwrap();
        assert!(points.iter().all(|p| range.contains(p[0])));
        assert!(points.windows(2).all(|w| w[0][0] <= w[1][0]));
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let range = Range::default();
        let a = generate_data(range, 20, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_data(range, 20, &mut StdRng::seed_from_u64(42)).unwrap();
        assert!(a.equals(&b));
    }

    #[test]
    fn test_noise_has_expected_spread() {
        let mut rng = StdRng::seed_from_u64(1234);
        let generator = DataGenerator::new(GeneratorConfig::with_samples(20_000)).unwrap();
        let df = generator.generate(Range::default(), &mut rng).unwrap();

        let residuals: Vec<f64> = extract_points(&df)
            .unwrap()
            .iter()
            .map(|[x, y]| y - x.powf(DEFAULT_EXPONENT))
            .collect();
        let n = residuals.len() as f64;
        let mean = residuals.iter().sum::<f64>() / n;
        let std = (residuals.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt();

        assert_abs_diff_eq!(mean, 0.0, epsilon = 0.5);
        assert_abs_diff_eq!(std, DEFAULT_NOISE_STD_DEV, epsilon = 0.5);
    }
}
