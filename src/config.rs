use crate::core::skill_check::DEFAULT_GAIN_FACTOR;
use crate::error::{GainsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "ModelConfig::default_gain_factor")]
    pub gain_factor: f64,
}

impl ModelConfig {
    fn default_gain_factor() -> f64 {
        DEFAULT_GAIN_FACTOR
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            gain_factor: Self::default_gain_factor(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartsConfig {
    #[serde(default = "ChartsConfig::default_out_dir")]
    pub out_dir: PathBuf,
    /// Skill held fixed while sweeping success chance.
    #[serde(default = "ChartsConfig::default_gain_chart_skill")]
    pub gain_chart_skill: f64,
    #[serde(default = "ChartsConfig::default_gain_width")]
    pub gain_width: u32,
    #[serde(default = "ChartsConfig::default_gain_height")]
    pub gain_height: u32,
    #[serde(default = "ChartsConfig::default_circles_width")]
    pub circles_width: u32,
    #[serde(default = "ChartsConfig::default_circles_height")]
    pub circles_height: u32,
}

impl ChartsConfig {
    fn default_out_dir() -> PathBuf {
        PathBuf::from(".")
    }
    fn default_gain_chart_skill() -> f64 {
        100.0
    }
    fn default_gain_width() -> u32 {
        1024
    }
    fn default_gain_height() -> u32 {
        400
    }
    fn default_circles_width() -> u32 {
        2048
    }
    fn default_circles_height() -> u32 {
        800
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            out_dir: Self::default_out_dir(),
            gain_chart_skill: Self::default_gain_chart_skill(),
            gain_width: Self::default_gain_width(),
            gain_height: Self::default_gain_height(),
            circles_width: Self::default_circles_width(),
            circles_height: Self::default_circles_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GainsConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub charts: ChartsConfig,
}

impl GainsConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|err| GainsError::Config(format!("{}: {err}", path.display())))
    }

    /// Every key of the default config, commented out, under its section header.
    fn commented_defaults() -> Result<String> {
        let text = toml::to_string_pretty(&Self::default())
            .map_err(|err| GainsError::Config(err.to_string()))?;
        let mut commented = String::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if !trimmed.is_empty() && !(trimmed.starts_with('[') && trimmed.ends_with(']')) {
                commented.push_str("# ");
            }
            commented.push_str(line);
            commented.push('\n');
        }
        Ok(commented)
    }

    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            return match Self::load(path) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("{err}. Using defaults.");
                    Self::default()
                }
            };
        }

        // File does not exist: write defaults and return them.
        match Self::commented_defaults() {
            Ok(text) => {
                if let Err(err) = fs::write(path, text) {
                    warn!("Failed to write default config to {}: {err}", path.display());
                }
            }
            Err(err) => warn!("Failed to serialize default config: {err}"),
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "magery_gains_config_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    #[test]
    fn load_or_default_writes_defaults_cleanly() {
        let path = unique_path("defaults.toml");
        let _ = fs::remove_file(&path);

        let cfg = GainsConfig::load_or_default(&path);
        assert!(path.exists(), "config file should be created");
        assert_eq!(cfg.model.gain_factor, DEFAULT_GAIN_FACTOR);
        assert_eq!(cfg.charts.out_dir, PathBuf::from("."));
        assert_eq!(cfg.charts.gain_chart_skill, 100.0);
        assert_eq!((cfg.charts.circles_width, cfg.charts.circles_height), (2048, 800));

        let contents = fs::read_to_string(&path).expect("read written config");
        assert!(contents.contains("[model]"));
        assert!(contents.contains("[charts]"));
        assert!(contents.contains("# circles_width = 2048"));
        assert!(contents.contains("# gain_chart_skill = 100.0"));

        // Everything is commented, so reading it back yields defaults.
        let reread = GainsConfig::load(&path).expect("parse commented defaults");
        assert_eq!(reread.model.gain_factor, DEFAULT_GAIN_FACTOR);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_or_default_reads_existing() {
        let path = unique_path("custom.toml");
        fs::write(
            &path,
            "[model]\ngain_factor = 0.5\n\n[charts]\nout_dir = \"plots\"\ncircles_width = 1024\n",
        )
        .unwrap();

        let cfg = GainsConfig::load_or_default(&path);
        assert_eq!(cfg.model.gain_factor, 0.5);
        assert_eq!(cfg.charts.out_dir, PathBuf::from("plots"));
        assert_eq!(cfg.charts.circles_width, 1024);
        assert_eq!(cfg.charts.circles_height, 800);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unparsable_file_is_a_config_error() {
        let path = unique_path("broken.toml");
        fs::write(&path, "[model]\ngain_factor = \"fast\"\n").unwrap();

        assert!(matches!(GainsConfig::load(&path), Err(GainsError::Config(_))));
        let cfg = GainsConfig::load_or_default(&path);
        assert_eq!(cfg.model.gain_factor, DEFAULT_GAIN_FACTOR);

        let _ = fs::remove_file(&path);
    }
}
