mod mercator;

pub use mercator::{mercator_to_wgs84, wgs84_to_mercator};

use geo_types::{Coord, Point};

/// A position in the plane the codes are built over.
///
/// `x` runs along the longitude axis and `y` along the latitude axis, so a
/// `(lon, lat)` tuple, a `geo_types::Point` or a `geo_types::Coord` can be
/// passed straight to [`crate::GeoCell::from_coord`].
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn longitude(&self) -> f64 {
        self.x()
    }

    fn latitude(&self) -> f64 {
        self.y()
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoHashError;
    use crate::index::{Bounds, encode};
    use geo_types::coord;

    #[test]
    fn test_tuple_is_lon_lat() {
        let sydney = (151.21, -33.86);
        assert_eq!(sydney.longitude(), 151.21);
        assert_eq!(sydney.latitude(), -33.86);
    }

    #[test]
    fn test_all_impls_encode_to_same_code() -> Result<(), GeoHashError> {
        let b = Bounds::WGS84;
        let expected = encode(&b.latitude, &b.longitude, -33.86, 151.21, 24)?;

        let encode_coord = |c: &dyn Coordinate| {
            encode(&b.latitude, &b.longitude, c.latitude(), c.longitude(), 24)
        };
        assert_eq!(encode_coord(&(151.21, -33.86))?, expected);
        assert_eq!(encode_coord(&Point::new(151.21, -33.86))?, expected);
        assert_eq!(encode_coord(&coord! { x: 151.21, y: -33.86 })?, expected);
        Ok(())
    }

    #[test]
    fn test_swapped_axes_fall_outside_wgs84() {
        // latitude 151.21 is not a valid WGS84 latitude
        let b = Bounds::WGS84;
        let swapped = (-33.86, 151.21);
        assert!(matches!(
            encode(&b.latitude, &b.longitude, swapped.latitude(), swapped.longitude(), 8),
            Err(GeoHashError::OutOfRange { .. })
        ));
    }
}
