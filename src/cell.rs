use crate::coord::{Coordinate, wgs84_to_mercator};
use crate::error::GeoHashError;
use crate::geom::Area;
use crate::index::{
    Bounds, Direction, GeoHashBits, Quadrant, decode, encode, get_neighbor, get_neighbors,
    next_child,
};
use geo_types::{Point, Polygon};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A code together with the bounds it was encoded against.
///
/// Codes on their own only make sense relative to a pair of ranges; `GeoCell`
/// carries them along so decoding and neighbour lookups need no extra
/// arguments.
///
/// # Example
///
/// ```
/// use geohash_bits::{Bounds, Direction, GeoCell};
///
/// # fn main() -> Result<(), geohash_bits::GeoHashError> {
/// let cell = GeoCell::from_coord(&(-0.12, 51.5), Bounds::WGS84, 16)?;
/// println!("{} at step {}", cell.code(), cell.step());
///
/// let north = cell.neighbor(Direction::North);
/// assert_eq!(north.area().latitude.min, cell.area().latitude.max);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCell {
    code: GeoHashBits,
    bounds: Bounds,
}

impl GeoCell {
    pub fn builder() -> GeoCellBuilder {
        GeoCellBuilder::new()
    }

    /// Wraps an existing code.
    pub fn new(code: GeoHashBits, bounds: Bounds) -> Self {
        Self { code, bounds }
    }

    /// Encodes an `(x = longitude, y = latitude)` coordinate.
    pub fn from_coord(
        coord: &impl Coordinate,
        bounds: Bounds,
        step: u8,
    ) -> Result<Self, GeoHashError> {
        let code = encode(
            &bounds.latitude,
            &bounds.longitude,
            coord.latitude(),
            coord.longitude(),
            step,
        )?;
        Ok(Self { code, bounds })
    }

    /// Projects a WGS84 `(lon, lat)` pair to Web Mercator and encodes it
    /// against [`Bounds::MERCATOR`].
    pub fn from_wgs84(coord: &impl Coordinate, step: u8) -> Result<Self, GeoHashError> {
        let merc = wgs84_to_mercator(coord)?;
        Self::from_coord(&merc, Bounds::MERCATOR, step)
    }

    /// Encodes many coordinates in parallel. Fails as a whole if any one fails.
    pub fn from_coords<C>(coords: &[C], bounds: Bounds, step: u8) -> Result<Vec<Self>, GeoHashError>
    where
        C: Coordinate + Sync,
    {
        debug!(count = coords.len(), step, "encoding coordinate batch");
        coords
            .par_iter()
            .map(|c| Self::from_coord(c, bounds, step))
            .collect()
    }

    pub fn code(&self) -> GeoHashBits {
        self.code
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn step(&self) -> u8 {
        self.code.step()
    }

    pub fn area(&self) -> Area {
        decode(&self.bounds.latitude, &self.bounds.longitude, &self.code)
    }

    pub fn center(&self) -> Point<f64> {
        self.area().center()
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.area().to_polygon()
    }

    pub fn neighbor(&self, direction: Direction) -> Self {
        Self::new(get_neighbor(&self.code, direction), self.bounds)
    }

    /// The eight surrounding cells in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> Vec<Self> {
        get_neighbors(&self.code)
            .iter()
            .map(|(_, code)| Self::new(code, self.bounds))
            .collect()
    }

    pub fn child(&self, quadrant: Quadrant) -> Self {
        Self::new(next_child(&self.code, quadrant), self.bounds)
    }

    pub fn children(&self) -> [Self; 4] {
        self.code.children().map(|code| Self::new(code, self.bounds))
    }

    pub fn parent(&self) -> Option<Self> {
        self.code.parent().map(|code| Self::new(code, self.bounds))
    }
}

/// Builder for [`GeoCell`]; missing inputs surface as
/// [`GeoHashError::MissingArgument`].
#[derive(Debug, Default)]
pub struct GeoCellBuilder {
    bounds: Option<Bounds>,
    step: Option<u8>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl GeoCellBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn step(mut self, step: u8) -> Self {
        self.step = Some(step);
        self
    }

    pub fn coord(mut self, coord: &impl Coordinate) -> Self {
        self.longitude = Some(coord.longitude());
        self.latitude = Some(coord.latitude());
        self
    }

    pub fn lat_lon(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn build(self) -> Result<GeoCell, GeoHashError> {
        let bounds = self.bounds.ok_or(GeoHashError::MissingArgument("bounds"))?;
        let step = self.step.ok_or(GeoHashError::MissingArgument("step"))?;
        let latitude = self
            .latitude
            .ok_or(GeoHashError::MissingArgument("latitude"))?;
        let longitude = self
            .longitude
            .ok_or(GeoHashError::MissingArgument("longitude"))?;

        GeoCell::from_coord(&(longitude, latitude), bounds, step)
    }
}

/// Bulk conversions over collections of [`GeoCell`]s.
///
/// Implemented for `[GeoCell]` and, through deref, `Vec<GeoCell>`.
pub trait GeoCellCollection {
    fn codes(&self) -> Vec<GeoHashBits>;
    fn to_polygons(&self) -> Vec<Polygon<f64>>;
}

impl GeoCellCollection for [GeoCell] {
    fn codes(&self) -> Vec<GeoHashBits> {
        self.iter().map(GeoCell::code).collect()
    }

    fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.par_iter().map(GeoCell::to_polygon).collect()
    }
}
