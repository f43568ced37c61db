use crate::error::GeoHashError;
use crate::geom::Area;
use crate::index::bits::GeoHashBits;
use crate::index::constants::MAX_STEP;
use crate::index::range::{Axis, Range};
use tracing::trace;

fn check_axis(axis: Axis, range: &Range, value: f64) -> Result<(), GeoHashError> {
    if !range.contains(value) {
        trace!(%axis, value, min = range.min, max = range.max, "coordinate out of range");
        return Err(GeoHashError::OutOfRange {
            axis,
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

/// Encodes a coordinate into a code of `step` subdivision levels.
///
/// Fails with [`GeoHashError::InvalidStep`] unless `1 <= step <= 32` and with
/// [`GeoHashError::OutOfRange`] when either coordinate falls outside its
/// range. Coordinates exactly on a range bound are accepted; NaN is rejected.
pub fn encode(
    lat_range: &Range,
    lon_range: &Range,
    latitude: f64,
    longitude: f64,
    step: u8,
) -> Result<GeoHashBits, GeoHashError> {
    if step == 0 || step > MAX_STEP {
        trace!(step, "rejected step");
        return Err(GeoHashError::InvalidStep(step));
    }
    lat_range.validate()?;
    lon_range.validate()?;
    check_axis(Axis::Latitude, lat_range, latitude)?;
    check_axis(Axis::Longitude, lon_range, longitude)?;

    let mut lat = *lat_range;
    let mut lon = *lon_range;
    let mut bits = 0u64;

    for _ in 0..step {
        let lat_bit = lat.narrow_towards(latitude);
        let lon_bit = lon.narrow_towards(longitude);
        bits = (((bits << 1) | lon_bit) << 1) | lat_bit;
    }

    Ok(GeoHashBits { bits, step })
}

/// Reconstructs the rectangle a code denotes.
///
/// The ranges must be the ones used at encode time; they are not checked.
pub fn decode(lat_range: &Range, lon_range: &Range, code: &GeoHashBits) -> Area {
    let mut latitude = *lat_range;
    let mut longitude = *lon_range;
    let step = u32::from(code.step);

    for i in 0..step {
        let lon_bit = code.bit((step - i) * 2 - 1);
        let lat_bit = code.bit((step - i) * 2 - 2);
        latitude.narrow_by_bit(lat_bit);
        longitude.narrow_by_bit(lon_bit);
    }

    Area {
        code: *code,
        latitude,
        longitude,
    }
}
