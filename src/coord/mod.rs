//! Coordinates and extents
//!
//! This module handles:
//! - Validated WGS84 coordinates in GeoJSON (longitude, latitude) order
//! - Bounding extents used by the host map to zoom on a result
//! - Geodesic buffers around a point

pub mod buffer;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geographic coordinate (longitude, latitude)
///
/// Fields are private so a constructed value always satisfies
/// longitude ∈ [-180, 180] and latitude ∈ [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    longitude: f64,
    latitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = Error;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Self::new(raw.longitude, raw.latitude)
    }
}

impl Coordinate {
    /// Create a validated coordinate
    ///
    /// Argument order is GeoJSON order: longitude first.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                longitude
            )));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                latitude
            )));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Build a coordinate from a GeoJSON position (`[lon, lat, ...]`)
    pub fn from_position(position: &[f64]) -> Result<Self> {
        match position {
            [longitude, latitude, ..] => Self::new(*longitude, *latitude),
            _ => Err(Error::InvalidCoordinates(format!(
                "GeoJSON position needs at least 2 values, got {}",
                position.len()
            ))),
        }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.longitude, self.latitude)
    }
}

/// Axis-aligned bounding region in WGS84 degrees
///
/// Values are not wrapped: an extent touching the antimeridian may carry
/// `xmin < -180` or `xmax > 180`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Extent {
    /// Whether the point lies inside or on the boundary
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.xmin..=self.xmax).contains(&point.longitude)
            && (self.ymin..=self.ymax).contains(&point.latitude)
    }

    /// Midpoint of the extent, as (longitude, latitude)
    pub fn center(&self) -> (f64, f64) {
        (
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
        )
    }

    #[cfg(test)]
    pub(crate) fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[cfg(test)]
    pub(crate) fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}
