//! Pipeline configuration (curvetrace.yaml).
//!
//! Every field has a default matching the reference tuning, so an empty
//! file or no file at all yields the standard pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, Result};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "curvetrace.yaml";

/// Tunable radii of the split pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Cluster radius applied right after candidate extraction.
    #[serde(default = "default_coarse_radius")]
    pub coarse_radius: f64,

    /// Cluster radius applied after centerline alignment.
    #[serde(default = "default_fine_radius")]
    pub fine_radius: f64,

    /// First neighbor search radius used by the tracer.
    #[serde(default = "default_search_radius")]
    pub search_radius: f64,

    /// Amount the tracer grows its search radius by after an empty search.
    #[serde(default = "default_search_step")]
    pub search_step: f64,

    /// Upper bound for the tracer's search radius.
    /// Defaults to the image diagonal plus one step.
    #[serde(default)]
    pub max_search_radius: Option<f64>,
}

fn default_coarse_radius() -> f64 {
    20.0
}

fn default_fine_radius() -> f64 {
    10.0
}

fn default_search_radius() -> f64 {
    10.0
}

fn default_search_step() -> f64 {
    5.0
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            coarse_radius: default_coarse_radius(),
            fine_radius: default_fine_radius(),
            search_radius: default_search_radius(),
            search_step: default_search_step(),
            max_search_radius: None,
        }
    }
}

impl SplitConfig {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CurveError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string and validate it.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| CurveError::Parse {
                message: format!("Invalid config: {}", e),
                help: Some(format!("Check {} syntax", CONFIG_FILE)),
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else `curvetrace.yaml` from `dir` when present,
    /// else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate: PathBuf = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject radii and steps that would stall or invert the pipeline.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("coarse_radius", self.coarse_radius),
            ("fine_radius", self.fine_radius),
            ("search_radius", self.search_radius),
            ("search_step", self.search_step),
        ];

        for (name, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(CurveError::Parse {
                    message: format!("{} must be a positive number, got {}", name, value),
                    help: None,
                });
            }
        }

        if let Some(max) = self.max_search_radius {
            if !(max.is_finite() && max >= self.search_radius) {
                return Err(CurveError::Parse {
                    message: format!(
                        "max_search_radius ({}) must be at least search_radius ({})",
                        max, self.search_radius
                    ),
                    help: None,
                });
            }
        }

        Ok(())
    }

    /// Effective search cap for an image with the given diagonal.
    pub fn effective_max_search_radius(&self, diagonal: f64) -> f64 {
        self.max_search_radius
            .unwrap_or(diagonal + self.search_step)
            .max(self.search_radius)
    }
}
