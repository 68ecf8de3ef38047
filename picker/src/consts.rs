//! Shared numeric constants for the picker crate.

// ── Coordinate ranges ───────────────────────────────────────────

/// Largest absolute latitude in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Largest absolute longitude in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

// ── Precision ───────────────────────────────────────────────────

/// Rounding scale for user-driven coordinate updates: six decimals (~0.11 m).
pub const COORDINATE_SCALE: f64 = 1_000_000.0;

// ── Widget defaults ─────────────────────────────────────────────

/// Map height in pixels when the host does not override it.
pub const DEFAULT_HEIGHT_PX: u32 = 400;

/// Initial zoom level when the host does not override it.
pub const DEFAULT_ZOOM: u8 = 15;

/// Fallback view center latitude when no marker is set.
pub const DEFAULT_LATITUDE: f64 = 36.999_001_9;

/// Fallback view center longitude when no marker is set.
pub const DEFAULT_LONGITUDE: f64 = -6.547_891_9;
