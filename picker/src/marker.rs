//! Markers, ordered marker collections, and the render records handed to the surface.
//!
//! A [`Marker`] is an immutable value: every `with_*` method consumes the
//! marker and returns a new one. There are no in-place setters. Markers carry
//! no identity beyond their attributes, so equality is structural.
//!
//! A [`MarkerCollection`] is positionally indexed. Removing index `i` shifts
//! every later marker down by one; indices are not stable across removals.

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoordinateError;
use crate::geo::Coordinate;

/// One labeled point on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    #[serde(flatten)]
    coordinate: Coordinate,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    tooltip: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    icon_color: Option<String>,
    /// Renderer-specific styling.
    #[serde(default)]
    options: Map<String, Value>,
    /// Application data; never sent to the surface.
    #[serde(default)]
    metadata: Map<String, Value>,
}

impl Marker {
    /// A bare marker at the given position.
    ///
    /// # Errors
    ///
    /// Returns a [`CoordinateError`] if the position is invalid.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        Ok(Self::at(Coordinate::new(latitude, longitude)?))
    }

    /// A bare marker at an already validated coordinate.
    #[must_use]
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            label: None,
            tooltip: None,
            icon: None,
            icon_color: None,
            options: Map::new(),
            metadata: Map::new(),
        }
    }

    // --- With-field constructors ---

    /// Same attributes, new position.
    #[must_use]
    pub fn with_coordinate(self, coordinate: Coordinate) -> Self {
        Self { coordinate, ..self }
    }

    #[must_use]
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), ..self }
    }

    #[must_use]
    pub fn with_tooltip(self, tooltip: impl Into<String>) -> Self {
        Self { tooltip: Some(tooltip.into()), ..self }
    }

    #[must_use]
    pub fn with_icon(self, icon: impl Into<String>) -> Self {
        Self { icon: Some(icon.into()), ..self }
    }

    #[must_use]
    pub fn with_icon_color(self, color: impl Into<String>) -> Self {
        Self { icon_color: Some(color.into()), ..self }
    }

    #[must_use]
    pub fn with_options(self, options: Map<String, Value>) -> Self {
        Self { options, ..self }
    }

    #[must_use]
    pub fn with_metadata(self, metadata: Map<String, Value>) -> Self {
        Self { metadata, ..self }
    }

    // --- Accessors ---

    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude()
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude()
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[must_use]
    pub fn icon_color(&self) -> Option<&str> {
        self.icon_color.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    #[must_use]
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Project to the plain record the rendering surface draws from.
    #[must_use]
    pub fn render(&self) -> MarkerData {
        MarkerData {
            lat: self.latitude(),
            lng: self.longitude(),
            label: self.label.clone(),
            tooltip: self.tooltip.clone(),
            icon: self.icon.clone(),
            icon_color: self.icon_color.clone(),
            options: self.options.clone(),
        }
    }
}

/// Render-ready marker record. This is the only shape the surface receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerData {
    pub lat: f64,
    pub lng: f64,
    pub label: Option<String>,
    pub tooltip: Option<String>,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub options: Map<String, Value>,
}

impl MarkerData {
    /// Record for a position with no display attributes.
    #[must_use]
    pub fn bare(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.latitude(),
            lng: coordinate.longitude(),
            label: None,
            tooltip: None,
            icon: None,
            icon_color: None,
            options: Map::new(),
        }
    }
}

/// Ordered, index-addressable sequence of markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerCollection {
    markers: Vec<Marker>,
}

impl MarkerCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the end; the new marker takes index `len() - 1`.
    pub fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Remove the marker at `index`, shifting later markers down by one.
    /// Returns `None` and leaves the collection untouched when out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Marker> {
        if index < self.markers.len() {
            Some(self.markers.remove(index))
        } else {
            None
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Marker> {
        self.markers.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    /// Render records in display order.
    #[must_use]
    pub fn render(&self) -> Vec<MarkerData> {
        self.markers.iter().map(Marker::render).collect()
    }
}

impl From<Vec<Marker>> for MarkerCollection {
    fn from(markers: Vec<Marker>) -> Self {
        Self { markers }
    }
}

impl FromIterator<Marker> for MarkerCollection {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self { markers: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a MarkerCollection {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}
