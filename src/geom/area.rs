use crate::coord::Coordinate;
use crate::index::{GeoHashBits, Range};
use geo::Intersects;
use geo_types::{Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// The rectangle a code denotes, accurate to the code's step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub code: GeoHashBits,
    pub latitude: Range,
    pub longitude: Range,
}

impl Area {
    /// Longitude extent of the cell.
    pub fn width(&self) -> f64 {
        self.longitude.width()
    }

    /// Latitude extent of the cell.
    pub fn height(&self) -> f64 {
        self.latitude.width()
    }

    /// Cell center as `(x = longitude, y = latitude)`.
    pub fn center(&self) -> Point<f64> {
        Point::new(self.longitude.mid(), self.latitude.mid())
    }

    /// Closed containment test; points on the edge are inside.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.latitude.contains(latitude) && self.longitude.contains(longitude)
    }

    /// Same as [`Area::contains`] for an `(x, y)` coordinate.
    pub fn contains_point(&self, point: &impl Coordinate) -> bool {
        self.to_rect()
            .intersects(&Point::new(point.x(), point.y()))
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.longitude.min, y: self.latitude.min },
            coord! { x: self.longitude.max, y: self.latitude.max },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}
