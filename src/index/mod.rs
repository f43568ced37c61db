mod bits;
pub mod constants;
mod encoding;
mod neighbors;
mod range;
mod subdivide;

pub use bits::GeoHashBits;
pub use constants::{MAX_STEP, MERCATOR_EXTENT};
pub use encoding::{decode, encode};
pub use neighbors::{Direction, Neighbors, get_neighbor, get_neighbors};
pub use range::{Axis, Bounds, Range};
pub use subdivide::{Quadrant, next_child};
