//! Map defaults parsed from environment variables.
//!
//! These are the values the widget falls back to when a caller does not
//! override them: default view center, zoom and height, the tile layer the
//! surface should draw, and the default interaction flags.

use picker::consts::{DEFAULT_HEIGHT_PX, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_ZOOM};
use picker::geo::Coordinate;
use picker::model::WidgetOptions;
use serde::Serialize;

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";
pub const DEFAULT_TILE_MAX_ZOOM: u8 = 19;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Parse { var: &'static str, value: String },
    #[error("default center is not a valid coordinate: {0}")]
    InvalidCenter(#[from] picker::error::CoordinateError),
}

/// Tile provider the surface draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapConfig {
    pub default_center: Coordinate,
    pub tile_layer: TileLayer,
    /// Defaults applied to every widget unless overridden per instance.
    pub widget: WidgetOptions,
}

impl MapConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `MAPPICKER_DEFAULT_LATITUDE` / `MAPPICKER_DEFAULT_LONGITUDE`: default 36.9990019, -6.5478919
    /// - `MAPPICKER_DEFAULT_ZOOM`: default 15
    /// - `MAPPICKER_DEFAULT_HEIGHT`: pixels, default 400
    /// - `MAPPICKER_TILE_URL`, `MAPPICKER_TILE_ATTRIBUTION`: OpenStreetMap
    /// - `MAPPICKER_TILE_MAX_ZOOM`: default 19
    /// - `MAPPICKER_INTERACTIVE`, `MAPPICKER_SHOW_LABEL`, `MAPPICKER_SHOW_PASTE_BUTTON`: `true`/`false`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let latitude = parse_or(&lookup, "MAPPICKER_DEFAULT_LATITUDE", DEFAULT_LATITUDE)?;
        let longitude = parse_or(&lookup, "MAPPICKER_DEFAULT_LONGITUDE", DEFAULT_LONGITUDE)?;
        let default_center = Coordinate::new(latitude, longitude)?;

        let tile_layer = TileLayer {
            url: lookup("MAPPICKER_TILE_URL").unwrap_or_else(|| DEFAULT_TILE_URL.to_string()),
            attribution: lookup("MAPPICKER_TILE_ATTRIBUTION").unwrap_or_else(|| DEFAULT_TILE_ATTRIBUTION.to_string()),
            max_zoom: parse_or(&lookup, "MAPPICKER_TILE_MAX_ZOOM", DEFAULT_TILE_MAX_ZOOM)?,
        };

        let widget = WidgetOptions {
            interactive: parse_or(&lookup, "MAPPICKER_INTERACTIVE", true)?,
            show_label: parse_or(&lookup, "MAPPICKER_SHOW_LABEL", true)?,
            show_paste_button: parse_or(&lookup, "MAPPICKER_SHOW_PASTE_BUTTON", false)?,
            height: parse_or(&lookup, "MAPPICKER_DEFAULT_HEIGHT", DEFAULT_HEIGHT_PX)?,
            zoom: parse_or(&lookup, "MAPPICKER_DEFAULT_ZOOM", DEFAULT_ZOOM)?,
        };

        Ok(Self { default_center, tile_layer, widget })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Parse { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
