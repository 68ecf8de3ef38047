//! Marker state model and render bridge for the map-picker widget.
//!
//! This crate owns the widget's canonical coordinate and marker state. It
//! decides which of the three mutually exclusive modes holds (no marker, one
//! marker, a marker collection), validates user-supplied coordinates, and
//! produces the render-ready marker list. The host is responsible only for
//! drawing tiles and markers, capturing pointer input, and forwarding the
//! resulting [`notify::Notification`]s to whoever listens.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Component state, mode reconciliation, and the input buffer |
//! | [`bridge`] | Adapter between a [`bridge::RenderSurface`] and the model |
//! | [`marker`] | Immutable markers, ordered collections, render records |
//! | [`geo`] | Validated coordinates, rounding, raw-value normalization |
//! | [`notify`] | Outbound notifications emitted by the model |
//! | [`error`] | Coordinate validation errors |
//! | [`consts`] | Shared numeric constants (ranges, precision, defaults) |

pub mod bridge;
pub mod consts;
pub mod error;
pub mod geo;
pub mod marker;
pub mod model;
pub mod notify;
