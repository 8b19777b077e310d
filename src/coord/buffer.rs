//! Geodesic buffers
//!
//! The host map zooms to a result using the extent of a buffer drawn around
//! the result point. Geodesy is delegated to the `geo` crate; the
//! computation sits behind [`BufferComputer`] so it can be swapped.

use crate::coord::{Coordinate, Extent};
use geo::{BoundingRect, Destination, Distance, Geodesic, MultiPoint, Point};

/// Computes the extent of a buffer around a point
pub trait BufferComputer: Send + Sync {
    /// Extent of the region within `radius_meters` of `point`
    fn buffer_meters(&self, point: Coordinate, radius_meters: f64) -> Extent;
}

/// Buffer on the WGS84 ellipsoid
///
/// Takes the bounding box of the geodesic destinations at bearings
/// 0/90/180/270. When the buffer reaches a pole every longitude is covered.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeodesicBuffer;

impl BufferComputer for GeodesicBuffer {
    fn buffer_meters(&self, point: Coordinate, radius_meters: f64) -> Extent {
        let radius_meters = radius_meters.max(0.0);
        let origin = Point::new(point.longitude(), point.latitude());

        let [north, east, south, west] =
            [0.0, 90.0, 180.0, 270.0].map(|bearing| Geodesic::destination(origin, bearing, radius_meters));

        // Keep east/west on the same side of the antimeridian as the origin
        let east = if east.x() < origin.x() {
            Point::new(east.x() + 360.0, east.y())
        } else {
            east
        };
        let west = if west.x() > origin.x() {
            Point::new(west.x() - 360.0, west.y())
        } else {
            west
        };

        let rect = MultiPoint::from(vec![origin, north, east, south, west]).bounding_rect();
        let (min, max) = match rect {
            Some(rect) => (rect.min(), rect.max()),
            None => (origin.0, origin.0),
        };

        let north_pole = Point::new(origin.x(), 90.0);
        let south_pole = Point::new(origin.x(), -90.0);
        let reaches_north = Geodesic::distance(origin, north_pole) <= radius_meters;
        let reaches_south = Geodesic::distance(origin, south_pole) <= radius_meters;

        if reaches_north || reaches_south {
            return Extent {
                xmin: -180.0,
                ymin: if reaches_south { -90.0 } else { min.y },
                xmax: 180.0,
                ymax: if reaches_north { 90.0 } else { max.y },
            };
        }

        Extent {
            xmin: min.x,
            ymin: min.y,
            xmax: max.x,
            ymax: max.y,
        }
    }
}
