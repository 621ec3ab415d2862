use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Absolute tolerance used by `==` on matrices.
pub const EQUALITY_TOLERANCE: f64 = 1e-9;

/// Magnitude at or below which a pivot is treated as zero.
pub const PIVOT_TOLERANCE: f64 = 1e-9;

/// Central configuration for the algorithms and the text codec.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct LinalgConfig {
    #[serde(default)]
    pub tolerance: Tolerance,

    #[serde(default)]
    pub format: FormatOptions,
}

/// Numerical thresholds.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Tolerance {
    /// Largest absolute element difference still considered equal.
    pub equality: f64,
    /// Pivots with magnitude `<= pivot` count as zero during elimination.
    pub pivot: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            equality: EQUALITY_TOLERANCE,
            pivot: PIVOT_TOLERANCE,
        }
    }
}

impl Tolerance {
    pub fn new(equality: f64, pivot: f64) -> Self {
        Self { equality, pivot }
    }

    pub(crate) fn is_zero(&self, value: f64) -> bool {
        value.abs() <= self.pivot
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [("equality", self.equality), ("pivot", self.pivot)] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("tolerance.{} must be a finite non-negative number, got {}", name, value);
            }
        }
        Ok(())
    }
}

/// Options for rendering matrices as pipe-delimited text.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    /// Fixed number of decimal places. `None` prints the shortest
    /// representation that parses back to the same value.
    pub precision: Option<usize>,
}

impl FormatOptions {
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision: Some(precision),
        }
    }
}

impl FromStr for LinalgConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: LinalgConfig =
            serde_json::from_str(s).context("Failed to parse linalg config")?;
        config.tolerance.validate()?;
        if let Some(precision) = config.format.precision {
            if precision > 17 {
                log::warn!(
                    "format.precision {} exceeds f64 significant digits; output will carry noise digits",
                    precision
                );
            }
        }
        Ok(config)
    }
}

/// Load a JSON configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LinalgConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    content
        .parse::<LinalgConfig>()
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = LinalgConfig::default();
        assert_eq!(config.tolerance.equality, EQUALITY_TOLERANCE);
        assert_eq!(config.tolerance.pivot, PIVOT_TOLERANCE);
        assert_eq!(config.format.precision, None);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: LinalgConfig = r#"{ "format": { "precision": 3 } }"#.parse().unwrap();
        assert_eq!(config.format.precision, Some(3));
        assert_eq!(config.tolerance, Tolerance::default());
    }

    #[test]
    fn negative_tolerance_rejected() {
        let err = r#"{ "tolerance": { "equality": 1e-9, "pivot": -1.0 } }"#
            .parse::<LinalgConfig>()
            .unwrap_err();
        assert!(err.to_string().contains("tolerance.pivot"));
    }

    #[test]
    fn is_zero_uses_pivot_threshold() {
        let tol = Tolerance::new(1e-9, 1e-6);
        assert!(tol.is_zero(5e-7));
        assert!(tol.is_zero(-1e-6));
        assert!(!tol.is_zero(2e-6));
    }
}
