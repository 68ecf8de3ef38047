//! Outbound notifications emitted by the model.
//!
//! Model operations return the notifications they produced, in order, rather
//! than calling into a UI object. The bridge turns them into surface commands
//! and the host forwards them to its own listeners.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Something the host or the rendering surface needs to react to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Notification {
    /// `update_coordinates` changed the single-marker position.
    CoordinatesUpdated { latitude: f64, longitude: f64 },
    /// A typed coordinate was applied; the viewport should animate to it.
    FlyToRequested { latitude: f64, longitude: f64 },
}

impl Notification {
    #[must_use]
    pub fn coordinates_updated(at: Coordinate) -> Self {
        Self::CoordinatesUpdated { latitude: at.latitude(), longitude: at.longitude() }
    }

    #[must_use]
    pub fn fly_to_requested(at: Coordinate) -> Self {
        Self::FlyToRequested { latitude: at.latitude(), longitude: at.longitude() }
    }

    /// Event name as it appears on the wire.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CoordinatesUpdated { .. } => "coordinates-updated",
            Self::FlyToRequested { .. } => "fly-to-requested",
        }
    }

    /// The position carried by the notification.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        match *self {
            Self::CoordinatesUpdated { latitude, longitude } | Self::FlyToRequested { latitude, longitude } => {
                (latitude, longitude)
            }
        }
    }
}
