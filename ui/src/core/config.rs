//! Dashboard tunables, optionally overridden by a JSON file in the user config dir.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "config.json";

/// Scored probabilities always fall inside this range, whatever the config says.
pub const PROBABILITY_BOUNDS: (f64, f64) = (30.0, 100.0);
pub const MAX_RASTER_SCALE: f32 = 4.0;
pub const MAX_HISTOGRAM_BINS: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub histogram_bins: usize,
    /// Probabilities strictly above this are flagged as seizure risk.
    pub risk_threshold: f64,
    pub probability_min: f64,
    pub probability_max: f64,
    /// Pixel density used when rasterizing charts for the PDF.
    pub raster_scale: f32,
    pub report_title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            histogram_bins: 30,
            risk_threshold: 80.0,
            probability_min: 30.0,
            probability_max: 100.0,
            raster_scale: 2.0,
            report_title: "EEG Data Visualization Report".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Missing file → defaults. Unreadable or malformed file → defaults plus a warning.
    pub fn from_path(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                log::warn!("couldn't read {}: {err}; using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&contents) {
            Ok(config) => {
                log::info!("loaded dashboard config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("invalid config in {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Loads from the platform config directory on desktop; defaults elsewhere.
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::from_path(&path),
            None => Self::default(),
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.histogram_bins == 0 || self.histogram_bins > MAX_HISTOGRAM_BINS {
            log::warn!("histogram_bins {} out of range; using default", self.histogram_bins);
            self.histogram_bins = defaults.histogram_bins;
        }

        let (lo, hi) = PROBABILITY_BOUNDS;
        let finite = self.probability_min.is_finite() && self.probability_max.is_finite();
        let min = self.probability_min.clamp(lo, hi);
        let max = self.probability_max.clamp(lo, hi);
        if finite && min < max {
            self.probability_min = min;
            self.probability_max = max;
        } else {
            log::warn!(
                "probability range {}..{} unusable; using default",
                self.probability_min,
                self.probability_max
            );
            self.probability_min = defaults.probability_min;
            self.probability_max = defaults.probability_max;
        }

        if !self.risk_threshold.is_finite() {
            self.risk_threshold = defaults.risk_threshold;
        }
        if !(self.raster_scale > 0.0 && self.raster_scale <= MAX_RASTER_SCALE) {
            log::warn!("raster_scale {} out of range; using default", self.raster_scale);
            self.raster_scale = defaults.raster_scale;
        }
        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn config_path() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "NeuroScope", "NeuroScope")?;
    Some(dirs.config_dir().join(CONFIG_FILENAME))
}

#[cfg(target_arch = "wasm32")]
pub fn config_path() -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{ "histogram_bins": 12 }"#).unwrap();
        assert_eq!(config.histogram_bins, 12);
        assert_eq!(config.risk_threshold, 80.0);
        assert_eq!(config.report_title, "EEG Data Visualization Report");
    }

    #[test]
    fn nonsense_values_are_reset() {
        let config = DashboardConfig::from_json(
            r#"{ "histogram_bins": 0, "probability_min": 90, "probability_max": 10, "raster_scale": -1 }"#,
        )
        .unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn probability_range_is_clamped_into_bounds() {
        let config =
            DashboardConfig::from_json(r#"{ "probability_min": 0, "probability_max": 90 }"#)
                .unwrap();
        assert_eq!((config.probability_min, config.probability_max), (30.0, 90.0));

        // entirely below the bounds collapses to an empty range, so defaults apply
        let config =
            DashboardConfig::from_json(r#"{ "probability_min": 0, "probability_max": 5 }"#)
                .unwrap();
        assert_eq!((config.probability_min, config.probability_max), (30.0, 100.0));
    }

    #[test]
    fn extreme_probability_range_cannot_overflow_the_draw() {
        use crate::core::profile::PatientProfile;
        use crate::scoring::{score_dataset, MockScorer};
        use rand::{rngs::StdRng, SeedableRng};

        let config = DashboardConfig::from_json(
            r#"{ "probability_min": -1e308, "probability_max": 1e308 }"#,
        )
        .unwrap();
        assert_eq!((config.probability_min, config.probability_max), (30.0, 100.0));

        let dataset = crate::core::dataset::Dataset::from_csv_bytes(b"sig\n1\n2\n").unwrap();
        let mut scorer = MockScorer::new(StdRng::seed_from_u64(5)).with_config(&config);
        for prediction in score_dataset(&dataset, &PatientProfile::default(), &mut scorer) {
            assert!((30.0..=100.0).contains(&prediction.probability));
        }
    }

    #[test]
    fn absurd_raster_scale_is_reset() {
        for scale in ["0", "-2", "1e30", "64"] {
            let json = format!(r#"{{ "raster_scale": {scale} }}"#);
            let config = DashboardConfig::from_json(&json).unwrap();
            assert_eq!(config.raster_scale, 2.0, "scale {scale}");
        }
        let config = DashboardConfig::from_json(r#"{ "raster_scale": 3.5 }"#).unwrap();
        assert_eq!(config.raster_scale, 3.5);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::from_path(&dir.path().join(CONFIG_FILENAME));
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert_eq!(
            DashboardConfig::from_path(file.path()),
            DashboardConfig::default()
        );
    }

    #[test]
    fn file_overrides_are_applied() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "risk_threshold": 75.5, "report_title": "Ward 3" }"#)
            .unwrap();
        let config = DashboardConfig::from_path(file.path());
        assert_eq!(config.risk_threshold, 75.5);
        assert_eq!(config.report_title, "Ward 3");
    }
}
