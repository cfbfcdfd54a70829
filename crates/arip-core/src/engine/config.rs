use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Settings for the external geometry steps.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    /// Spacing of the dot array in Angstroms.
    pub interval: f64,
    /// Whether the volume step samples at increased dot density.
    pub density: bool,
    /// Reference data consumed by the surface step.
    pub reference_path: PathBuf,
}

/// Settings forwarded to the external reporter.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub output_dir: PathBuf,
    /// Contact-type classification thresholds.
    pub thresholds: Vec<f64>,
    pub compress: bool,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub sampling: SamplingConfig,
    pub report: ReportSettings,
}

impl AnalysisConfig {
    pub fn verbose(&self) -> bool {
        self.report.verbose
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    interval: Option<f64>,
    density: Option<bool>,
    reference_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    thresholds: Option<Vec<f64>>,
    compress: Option<bool>,
    verbose: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interval(mut self, interval: f64) -> Self {
        self.interval = Some(interval);
        self
    }
    pub fn density(mut self, density: bool) -> Self {
        self.density = Some(density);
        self
    }
    pub fn reference_path(mut self, path: PathBuf) -> Self {
        self.reference_path = Some(path);
        self
    }
    pub fn output_dir(mut self, path: PathBuf) -> Self {
        self.output_dir = Some(path);
        self
    }
    pub fn thresholds(mut self, thresholds: Vec<f64>) -> Self {
        self.thresholds = Some(thresholds);
        self
    }
    pub fn compress(mut self, compress: bool) -> Self {
        self.compress = Some(compress);
        self
    }
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let interval = self
            .interval
            .ok_or(ConfigError::MissingParameter("interval"))?;
        if !(interval.is_finite() && interval > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "interval",
                reason: format!("must be a positive number, got {}", interval),
            });
        }
        let sampling = SamplingConfig {
            interval,
            density: self.density.unwrap_or(false),
            reference_path: self
                .reference_path
                .ok_or(ConfigError::MissingParameter("reference_path"))?,
        };
        let report = ReportSettings {
            output_dir: self
                .output_dir
                .ok_or(ConfigError::MissingParameter("output_dir"))?,
            thresholds: self
                .thresholds
                .ok_or(ConfigError::MissingParameter("thresholds"))?,
            compress: self.compress.unwrap_or(false),
            verbose: self.verbose.unwrap_or(false),
        };
        Ok(AnalysisConfig { sampling, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
            .interval(0.5)
            .reference_path(PathBuf::from("ref.csv"))
            .output_dir(PathBuf::from("out"))
            .thresholds(vec![3.9, 4.5])
    }

    #[test]
    fn build_succeeds_with_required_parameters_and_defaults_flags() {
        let config = complete().build().unwrap();
        assert_eq!(config.sampling.interval, 0.5);
        assert!(!config.sampling.density);
        assert_eq!(config.report.thresholds, vec![3.9, 4.5]);
        assert!(!config.report.compress);
        assert!(!config.verbose());
    }

    #[test]
    fn build_keeps_explicit_flags() {
        let config = complete()
            .density(true)
            .compress(true)
            .verbose(true)
            .build()
            .unwrap();
        assert!(config.sampling.density);
        assert!(config.report.compress);
        assert!(config.verbose());
    }

    #[test]
    fn build_reports_missing_parameters() {
        let result = AnalysisConfigBuilder::new()
            .reference_path(PathBuf::from("ref.csv"))
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("interval")));

        let result = AnalysisConfigBuilder::new().interval(1.0).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("reference_path")));

        let result = AnalysisConfigBuilder::new()
            .interval(1.0)
            .reference_path(PathBuf::from("ref.csv"))
            .output_dir(PathBuf::from("out"))
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("thresholds")));
    }

    #[test]
    fn build_rejects_non_positive_interval() {
        for bad in [0.0, -0.5, f64::NAN] {
            let result = complete().interval(bad).build();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidParameter {
                    name: "interval",
                    ..
                })
            ));
        }
    }
}
