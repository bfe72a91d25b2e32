//! Process configuration from the environment.

use std::env;
use std::path::PathBuf;

use crate::render::RenderOptions;
use crate::types::{DEFAULT_DELAY_MS, DEFAULT_TILE_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Directory for `output.png` / `output.gif` when `--out` is not given
    pub out_dir: PathBuf,
    pub tile_size: u32,
    pub delay_ms: u32,
    pub transparent: bool,
    /// `tracing` level name
    pub log_level: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            tile_size: DEFAULT_TILE_SIZE,
            delay_ms: DEFAULT_DELAY_MS,
            transparent: false,
            log_level: "info".to_string(),
        }
    }
}

impl RenderConfig {
    /// Create from `FUMEN_RENDER_*` environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let out_dir = lookup("FUMEN_RENDER_OUT_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.out_dir);
        let tile_size = lookup("FUMEN_RENDER_TILE_SIZE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.tile_size);
        let delay_ms = lookup("FUMEN_RENDER_DELAY_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.delay_ms);
        let transparent = lookup("FUMEN_RENDER_TRANSPARENT")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.transparent);
        let log_level = lookup("FUMEN_RENDER_LOG").unwrap_or(defaults.log_level);

        Self {
            out_dir,
            tile_size,
            delay_ms,
            transparent,
            log_level,
        }
    }

    /// Render options seeded from this config.
    pub fn render_defaults(&self) -> RenderOptions {
        RenderOptions {
            tile_size: self.tile_size,
            delay_ms: self.delay_ms,
            transparent: self.transparent,
            ..RenderOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = RenderConfig::from_lookup(|_| None);
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let vars: HashMap<&str, &str> = [
            ("FUMEN_RENDER_TILE_SIZE", "30"),
            ("FUMEN_RENDER_DELAY_MS", "fast"),
            ("FUMEN_RENDER_TRANSPARENT", "TRUE"),
            ("FUMEN_RENDER_OUT_DIR", "  "),
        ]
        .into_iter()
        .collect();
        let config = RenderConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.tile_size, 30);
        assert_eq!(config.delay_ms, DEFAULT_DELAY_MS);
        assert!(config.transparent);
        assert_eq!(config.out_dir, PathBuf::from("."));

        let options = config.render_defaults();
        assert_eq!(options.tile_size, 30);
        assert!(options.transparent);
    }
}
