//! Component state for one map-picker widget instance.
//!
//! DESIGN
//! ======
//! The aggregate is always in exactly one [`Mode`]: `Empty`, `Single` (one
//! marker) or `Multi` (a non-empty collection). The mode is an enum, so the
//! single-marker slot and the collection can never both be set. The flat
//! latitude/longitude pair older callers rely on is read through from the
//! single marker instead of being stored a second time.
//!
//! Every mutation goes through a method on [`MarkerStateModel`] and returns
//! the [`Notification`]s it produced. Calls are expected to be serialized by
//! the host (one user interaction fully processed before the next), so the
//! model holds no locks.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::{DEFAULT_HEIGHT_PX, DEFAULT_ZOOM};
use crate::error::FieldError;
use crate::geo::{Coordinate, RawCoordinate, coordinate_from_raw, parse_coordinate_text};
use crate::marker::{Marker, MarkerCollection, MarkerData};
use crate::notify::Notification;

// =============================================================================
// OPTIONS AND CONSTRUCTION INPUT
// =============================================================================

/// Per-widget display and behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    /// When false, pointer and text updates are silently ignored.
    pub interactive: bool,
    /// Show the coordinate label under the map.
    pub show_label: bool,
    /// Show the button that reveals the coordinate text entry.
    pub show_paste_button: bool,
    /// Map height in pixels.
    pub height: u32,
    /// Initial zoom level.
    pub zoom: u8,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            interactive: true,
            show_label: true,
            show_paste_button: false,
            height: DEFAULT_HEIGHT_PX,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Construction parameters for a widget.
///
/// At most one of `markers`, `marker`, or the raw `latitude`/`longitude` pair
/// is used, in that priority order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetInit {
    #[serde(default)]
    pub latitude: Option<RawCoordinate>,
    #[serde(default)]
    pub longitude: Option<RawCoordinate>,
    #[serde(default)]
    pub marker: Option<Marker>,
    #[serde(default)]
    pub markers: Option<MarkerCollection>,
    #[serde(flatten)]
    pub options: WidgetOptions,
}

// =============================================================================
// MODE
// =============================================================================

/// The marker content of the widget. Exactly one variant holds at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Mode {
    /// No coordinate, no marker, no collection.
    #[default]
    Empty,
    /// Exactly one marker.
    Single(Marker),
    /// A non-empty, ordered collection.
    Multi(MarkerCollection),
}

/// Discriminant of [`Mode`], for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Empty,
    Single,
    Multi,
}

impl Mode {
    #[must_use]
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Empty => ModeKind::Empty,
            Self::Single(_) => ModeKind::Single,
            Self::Multi(_) => ModeKind::Multi,
        }
    }
}

// =============================================================================
// INPUT BUFFER
// =============================================================================

/// Visibility of the coordinate text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVisibility {
    #[default]
    Hidden,
    Visible,
}

/// Ephemeral text-entry state for pasting `"lat, lng"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputBuffer {
    visibility: InputVisibility,
    text: String,
    error: Option<FieldError>,
}

impl InputBuffer {
    #[must_use]
    pub fn visibility(&self) -> InputVisibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == InputVisibility::Visible
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The validation error from the last failed apply, if any.
    #[must_use]
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    fn toggle(&mut self) {
        self.visibility = match self.visibility {
            InputVisibility::Hidden => InputVisibility::Visible,
            InputVisibility::Visible => InputVisibility::Hidden,
        };
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// MODEL
// =============================================================================

/// Canonical coordinate and marker state of one widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerStateModel {
    mode: Mode,
    options: WidgetOptions,
    input: InputBuffer,
}

impl MarkerStateModel {
    /// An empty widget.
    #[must_use]
    pub fn new(options: WidgetOptions) -> Self {
        Self { mode: Mode::Empty, options, input: InputBuffer::default() }
    }

    /// Build the widget from construction parameters.
    ///
    /// A non-empty collection wins over a marker, which wins over raw
    /// coordinates. Raw coordinates produce a bare single marker only when
    /// both are present and valid; otherwise the widget starts empty.
    #[must_use]
    pub fn initialize(init: WidgetInit) -> Self {
        let WidgetInit { latitude, longitude, marker, markers, options } = init;

        let mode = match (markers, marker) {
            (Some(collection), _) if !collection.is_empty() => Mode::Multi(collection),
            (_, Some(marker)) => Mode::Single(marker),
            _ => coordinate_from_raw(latitude.as_ref(), longitude.as_ref())
                .map_or(Mode::Empty, |c| Mode::Single(Marker::at(c))),
        };

        debug!(mode = ?mode.kind(), interactive = options.interactive, "widget initialized");
        Self { mode, options, input: InputBuffer::default() }
    }

    // --- Pointer / text updates ---

    /// Move the single marker to `(lat, lng)`, rounded to six decimals.
    ///
    /// Creates a bare marker when the widget is empty and keeps every display
    /// attribute when a marker already exists. Multi mode is left alone: this
    /// operation only ever touches the single-marker slot. Non-interactive
    /// widgets ignore the call. Invalid geometry is dropped.
    pub fn update_coordinates(&mut self, lat: f64, lng: f64) -> Vec<Notification> {
        if !self.options.interactive {
            debug!(lat, lng, "update_coordinates ignored: widget is not interactive");
            return Vec::new();
        }

        let target = match Coordinate::new(lat, lng) {
            Ok(c) => c.rounded(),
            Err(e) => {
                warn!(error = %e, lat, lng, "update_coordinates rejected invalid geometry");
                return Vec::new();
            }
        };

        if let Mode::Multi(collection) = &self.mode {
            debug!(count = collection.len(), "update_coordinates ignored in multi-marker mode");
            return Vec::new();
        }

        self.mode = match std::mem::take(&mut self.mode) {
            Mode::Empty => Mode::Single(Marker::at(target)),
            Mode::Single(marker) => Mode::Single(marker.with_coordinate(target)),
            multi @ Mode::Multi(_) => multi,
        };

        vec![Notification::coordinates_updated(target)]
    }

    /// Validate `"<lat>, <lng>"` text and apply it.
    ///
    /// On success the input buffer is hidden and cleared and a fly-to
    /// notification follows any coordinate update. On failure the state is
    /// unchanged and a field error is recorded on the input buffer.
    pub fn parse_and_apply_text_coordinates(&mut self, text: &str) -> Vec<Notification> {
        if !self.options.interactive {
            debug!("text apply ignored: widget is not interactive");
            return Vec::new();
        }

        let parsed = match parse_coordinate_text(text) {
            Ok(c) => c,
            Err(e) => {
                debug!(error = %e, input = %text, "coordinate text rejected");
                self.input.error = Some(FieldError::coordinate_input(e));
                return Vec::new();
            }
        };

        let mut out = self.update_coordinates(parsed.latitude(), parsed.longitude());
        self.input.reset();
        out.push(Notification::fly_to_requested(parsed.rounded()));
        out
    }

    /// Replace the text currently typed into the coordinate entry.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input.text = text.into();
    }

    /// Apply whatever is in the input buffer.
    pub fn apply_input(&mut self) -> Vec<Notification> {
        let text = self.input.text.clone();
        self.parse_and_apply_text_coordinates(&text)
    }

    /// Show or hide the coordinate text entry.
    pub fn toggle_input_visibility(&mut self) {
        self.input.toggle();
    }

    // --- Collection edits ---

    /// Append a marker, switching to multi-marker mode.
    ///
    /// An existing single marker is moved into the new collection first, so it
    /// is never dropped.
    pub fn add_marker(&mut self, marker: Marker) {
        self.mode = match std::mem::take(&mut self.mode) {
            Mode::Empty => Mode::Multi(vec![marker].into()),
            Mode::Single(existing) => Mode::Multi(vec![existing, marker].into()),
            Mode::Multi(mut collection) => {
                collection.push(marker);
                Mode::Multi(collection)
            }
        };
    }

    /// Remove the marker at `index` from the collection.
    ///
    /// Returns the removed marker, or `None` when not in multi-marker mode or
    /// the index is out of bounds. A one-element collection stays in multi
    /// mode; removing the last marker returns the widget to `Empty`.
    pub fn remove_marker(&mut self, index: usize) -> Option<Marker> {
        let Mode::Multi(collection) = &mut self.mode else {
            debug!(index, "remove_marker ignored: not in multi-marker mode");
            return None;
        };

        let removed = collection.remove(index);
        if removed.is_none() {
            debug!(index, len = collection.len(), "remove_marker ignored: index out of bounds");
        }
        if collection.is_empty() {
            self.mode = Mode::Empty;
        }
        removed
    }

    /// Return to `Empty` unconditionally.
    pub fn clear(&mut self) {
        self.mode = Mode::Empty;
    }

    // --- Queries ---

    /// Render records for the surface, in display order.
    #[must_use]
    pub fn project_render_data(&self) -> Vec<MarkerData> {
        match &self.mode {
            Mode::Multi(collection) => collection.render(),
            Mode::Single(marker) => vec![marker.render()],
            Mode::Empty => Vec::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[must_use]
    pub fn options(&self) -> WidgetOptions {
        self.options
    }

    #[must_use]
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    #[must_use]
    pub fn is_multi_marker_mode(&self) -> bool {
        matches!(self.mode, Mode::Multi(_))
    }

    #[must_use]
    pub fn has_single_marker(&self) -> bool {
        matches!(self.mode, Mode::Single(_))
    }

    /// The single marker, in single-marker mode.
    #[must_use]
    pub fn marker(&self) -> Option<&Marker> {
        match &self.mode {
            Mode::Single(marker) => Some(marker),
            _ => None,
        }
    }

    /// The collection, in multi-marker mode.
    #[must_use]
    pub fn markers(&self) -> Option<&MarkerCollection> {
        match &self.mode {
            Mode::Multi(collection) => Some(collection),
            _ => None,
        }
    }

    /// Legacy flat latitude; set only in single-marker mode.
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.marker().map(Marker::latitude)
    }

    /// Legacy flat longitude; set only in single-marker mode.
    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.marker().map(Marker::longitude)
    }

    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.marker().is_some()
    }

    /// Where the view should center: the single marker, else `fallback`.
    #[must_use]
    pub fn display_center(&self, fallback: Coordinate) -> Coordinate {
        self.marker().map_or(fallback, Marker::coordinate)
    }
}
