//! A rendering surface that records commands as JSON for an out-of-process renderer.

use picker::bridge::RenderSurface;
use picker::geo::Coordinate;
use picker::marker::MarkerData;
use serde::Serialize;

/// One outbound command, as printed on stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum SurfaceCommand {
    ShowMarkers { markers: Vec<MarkerData>, zoom: u8 },
    FlyTo { lat: f64, lng: f64 },
    MoveMarker { lat: f64, lng: f64 },
}

/// Queues commands until the host drains and prints them.
///
/// `ready` models the renderer's initialization handshake; commands sent to a
/// surface that is not ready never reach it.
#[derive(Debug, Default)]
pub struct JsonSurface {
    ready: bool,
    outbox: Vec<SurfaceCommand>,
}

impl JsonSurface {
    #[must_use]
    pub fn new(ready: bool) -> Self {
        Self { ready, outbox: Vec::new() }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn drain(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.outbox)
    }
}

impl RenderSurface for JsonSurface {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn show_markers(&mut self, markers: &[MarkerData], zoom: u8) {
        self.outbox.push(SurfaceCommand::ShowMarkers { markers: markers.to_vec(), zoom });
    }

    fn fly_to(&mut self, target: Coordinate) {
        self.outbox.push(SurfaceCommand::FlyTo { lat: target.latitude(), lng: target.longitude() });
    }

    fn move_marker(&mut self, target: Coordinate) {
        self.outbox.push(SurfaceCommand::MoveMarker { lat: target.latitude(), lng: target.longitude() });
    }
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod tests;
