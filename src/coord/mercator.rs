use crate::coord::Coordinate;
use crate::error::GeoHashError;
use geo_types::Point;
use proj::Proj;
use tracing::debug;

fn convert(from: &str, to: &str, coord: &impl Coordinate) -> Result<Point<f64>, GeoHashError> {
    let proj = Proj::new_known_crs(from, to, None).map_err(|e| {
        debug!(from, to, error = %e, "failed to build projection");
        GeoHashError::ProjectionError(e.to_string())
    })?;

    let (x, y) = proj.convert((coord.x(), coord.y())).map_err(|e| {
        debug!(from, to, x = coord.x(), y = coord.y(), error = %e, "projection failed");
        GeoHashError::ProjectionError(e.to_string())
    })?;
    Ok(Point::new(x, y))
}

/// Projects a WGS84 `(lon, lat)` coordinate to Web Mercator metres (EPSG:3857).
pub fn wgs84_to_mercator(coord: &impl Coordinate) -> Result<Point<f64>, GeoHashError> {
    convert("EPSG:4326", "EPSG:3857", coord)
}

/// Inverse of [`wgs84_to_mercator`].
pub fn mercator_to_wgs84(coord: &impl Coordinate) -> Result<Point<f64>, GeoHashError> {
    convert("EPSG:3857", "EPSG:4326", coord)
}
