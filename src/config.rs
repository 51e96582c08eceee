//! Editor tunables with environment overrides.

use crate::consts::{DEFAULT_TEXT, DEFAULT_TEXT_HEIGHT, DEFAULT_TEXT_WIDTH, SIDE_HIT_HALF_PX};
use crate::error::ConfigError;

pub const ENV_TEXT_WIDTH: &str = "RIPPLE_TEXT_WIDTH";
pub const ENV_TEXT_HEIGHT: &str = "RIPPLE_TEXT_HEIGHT";
pub const ENV_DEFAULT_TEXT: &str = "RIPPLE_DEFAULT_TEXT";
pub const ENV_HANDLE_SLOP_PX: &str = "RIPPLE_HANDLE_SLOP_PX";

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Width of new text objects, in scene units.
    pub text_width: f64,
    /// Height of new text objects, in scene units.
    pub text_height: f64,
    /// Initial content of new text objects.
    pub default_text: String,
    /// Half-width of the hit band around side handles, in screen pixels.
    pub handle_slop_px: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            text_width: DEFAULT_TEXT_WIDTH,
            text_height: DEFAULT_TEXT_HEIGHT,
            default_text: DEFAULT_TEXT.to_string(),
            handle_slop_px: SIDE_HIT_HALF_PX,
        }
    }
}

impl EditorConfig {
    /// Build config from process environment variables.
    ///
    /// Optional:
    /// - `RIPPLE_TEXT_WIDTH`: default 100
    /// - `RIPPLE_TEXT_HEIGHT`: default 100
    /// - `RIPPLE_DEFAULT_TEXT`: default `"Enter text here"`
    /// - `RIPPLE_HANDLE_SLOP_PX`: default 3
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Absent keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text_width = parse_positive(ENV_TEXT_WIDTH, lookup(ENV_TEXT_WIDTH), defaults.text_width)?;
        let text_height = parse_positive(ENV_TEXT_HEIGHT, lookup(ENV_TEXT_HEIGHT), defaults.text_height)?;
        let default_text = lookup(ENV_DEFAULT_TEXT).unwrap_or(defaults.default_text);
        let handle_slop_px =
            parse_non_negative(ENV_HANDLE_SLOP_PX, lookup(ENV_HANDLE_SLOP_PX), defaults.handle_slop_px)?;

        Ok(Self { text_width, text_height, default_text, handle_slop_px })
    }
}

fn parse_f64(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::Invalid { key, value: raw.to_string() }),
    }
}

fn parse_positive(key: &'static str, raw: Option<String>, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let v = parse_f64(key, &raw)?;
    if v > 0.0 { Ok(v) } else { Err(ConfigError::Invalid { key, value: raw }) }
}

fn parse_non_negative(key: &'static str, raw: Option<String>, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let v = parse_f64(key, &raw)?;
    if v >= 0.0 { Ok(v) } else { Err(ConfigError::Invalid { key, value: raw }) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
