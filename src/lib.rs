//! # geohash-bits
//!
//! Interleaved-bit (geohash style) quad-tree codes over two caller supplied
//! ranges. A code's bit pairs hold one subdivision level each, longitude in the
//! high bit and latitude in the low bit, so prefixes of a code name the
//! enclosing cells.
//!
//! ### 1. Free functions over ranges
//!
//! ```
//! use geohash_bits::{Bounds, Direction, decode, encode, get_neighbor};
//!
//! # fn main() -> Result<(), geohash_bits::GeoHashError> {
//! let b = Bounds::MERCATOR;
//! let code = encode(&b.latitude, &b.longitude, 0.0, 0.0, 30)?;
//! assert_eq!(code.bits(), 288230376151711743);
//!
//! let area = decode(&b.latitude, &b.longitude, &code);
//! let east = get_neighbor(&code, Direction::East);
//! assert_eq!(get_neighbor(&east, Direction::West), code);
//! # let _ = area;
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GeoCell` - codes that remember their bounds
//!
//! ```
//! use geohash_bits::{Bounds, GeoCell, Quadrant};
//!
//! # fn main() -> Result<(), geohash_bits::GeoHashError> {
//! let cell = GeoCell::builder()
//!     .bounds(Bounds::WGS84)
//!     .step(12)
//!     .lat_lon(48.85, 2.35)
//!     .build()?;
//!
//! let polygon = cell.to_polygon();
//! let child = cell.child(Quadrant::LeftTop);
//! assert_eq!(child.parent(), Some(cell));
//! # let _ = polygon;
//! # Ok(())
//! # }
//! ```

pub mod cell;
pub mod coord;
pub mod error;
pub mod geom;
pub mod index;

pub use cell::{GeoCell, GeoCellBuilder, GeoCellCollection};
pub use coord::{Coordinate, mercator_to_wgs84, wgs84_to_mercator};
pub use error::{ErrorKind, GeoHashError};
pub use geom::Area;
pub use index::{
    Axis, Bounds, Direction, GeoHashBits, MAX_STEP, MERCATOR_EXTENT, Neighbors, Quadrant, Range,
    decode, encode, get_neighbor, get_neighbors, next_child,
};

pub use geo_types;
