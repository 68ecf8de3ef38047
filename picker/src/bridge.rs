//! Adapter between the rendering surface and the marker state model.
//!
//! The surface (tiles, glyphs, camera, pointer capture) lives outside this
//! crate and is reached only through the [`RenderSurface`] trait. Raw pointer
//! events come in as [`SurfaceEvent`]s and are handed to the model unchanged;
//! the model does all validation. Notifications coming back out are turned
//! into camera and glyph commands.
//!
//! The bridge owns the model. Collection edits go through the bridge so the
//! surface is re-synced after each one.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use tracing::{debug, warn};

use crate::geo::Coordinate;
use crate::marker::{Marker, MarkerData};
use crate::model::MarkerStateModel;
use crate::notify::Notification;

/// The map-drawing collaborator.
pub trait RenderSurface {
    /// Whether the surface has finished initializing and can take commands.
    fn is_ready(&self) -> bool {
        true
    }

    /// Draw exactly `markers` and fit the view to them at `zoom`.
    fn show_markers(&mut self, markers: &[MarkerData], zoom: u8);

    /// Recenter the camera on `target`, keeping the current zoom.
    fn fly_to(&mut self, target: Coordinate);

    /// Move the single marker glyph to `target`.
    fn move_marker(&mut self, target: Coordinate);
}

/// Raw interaction reported by the surface. Not pre-validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// The user clicked an empty point on the map.
    PointClicked { lat: f64, lng: f64 },
    /// The user released a dragged marker.
    MarkerDragEnded { lat: f64, lng: f64 },
}

impl SurfaceEvent {
    #[must_use]
    pub fn position(self) -> (f64, f64) {
        match self {
            Self::PointClicked { lat, lng } | Self::MarkerDragEnded { lat, lng } => (lat, lng),
        }
    }
}

/// Owns a widget's model and, once attached, its rendering surface.
pub struct RenderBridge<S> {
    model: MarkerStateModel,
    surface: Option<S>,
}

impl<S: RenderSurface> RenderBridge<S> {
    /// A bridge with no surface attached yet.
    #[must_use]
    pub fn new(model: MarkerStateModel) -> Self {
        Self { model, surface: None }
    }

    /// Attach (or replace) the surface and push the current marker set to it.
    pub fn attach(&mut self, surface: S) {
        self.surface = Some(surface);
        self.sync_view();
    }

    /// Detach the surface. Later surface events are dropped until a new one is attached.
    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }

    // --- Inbound from the surface ---

    /// Forward a click or drag-end to the model.
    ///
    /// Dropped (and logged) when no ready surface is attached, so a
    /// half-initialized renderer never feeds geometry into the model.
    pub fn handle_event(&mut self, event: SurfaceEvent) -> Vec<Notification> {
        if ready(&mut self.surface).is_none() {
            warn!(?event, "surface event dropped: rendering surface not ready");
            return Vec::new();
        }
        let (lat, lng) = event.position();
        self.model.update_coordinates(lat, lng)
    }

    // --- Inbound from the host ---

    /// Validate and apply typed coordinates, then move the camera on success.
    ///
    /// The single marker glyph follows the camera. In multi-marker mode only
    /// the camera moves.
    pub fn apply_text(&mut self, text: &str) -> Vec<Notification> {
        let out = self.model.parse_and_apply_text_coordinates(text);
        self.dispatch(&out);
        out
    }

    /// Apply the model's buffered input text.
    pub fn apply_input(&mut self) -> Vec<Notification> {
        let out = self.model.apply_input();
        self.dispatch(&out);
        out
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.model.set_input_text(text);
    }

    pub fn toggle_input_visibility(&mut self) {
        self.model.toggle_input_visibility();
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.model.add_marker(marker);
        self.sync_view();
    }

    pub fn remove_marker(&mut self, index: usize) -> Option<Marker> {
        let removed = self.model.remove_marker(index);
        if removed.is_some() {
            self.sync_view();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.model.clear();
        self.sync_view();
    }

    // --- Outbound to the surface ---

    /// Push the model's render data to the surface.
    pub fn sync_view(&mut self) {
        let markers = self.model.project_render_data();
        let zoom = self.model.options().zoom;
        match ready(&mut self.surface) {
            Some(surface) => surface.show_markers(&markers, zoom),
            None => debug!(count = markers.len(), "view sync skipped: rendering surface not ready"),
        }
    }

    fn dispatch(&mut self, notifications: &[Notification]) {
        for notification in notifications {
            let Notification::FlyToRequested { latitude, longitude } = *notification else {
                continue;
            };
            let target = match Coordinate::new(latitude, longitude) {
                Ok(c) => c,
                Err(e) => {
                    warn!(error = %e, latitude, longitude, "fly-to skipped: invalid target");
                    continue;
                }
            };
            let has_glyph = self.model.has_single_marker();
            match ready(&mut self.surface) {
                Some(surface) => {
                    surface.fly_to(target);
                    if has_glyph {
                        surface.move_marker(target);
                    }
                }
                None => warn!(latitude, longitude, "fly-to not delivered: rendering surface not ready"),
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn model(&self) -> &MarkerStateModel {
        &self.model
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }
}

fn ready<S: RenderSurface>(surface: &mut Option<S>) -> Option<&mut S> {
    surface.as_mut().filter(|s| s.is_ready())
}
