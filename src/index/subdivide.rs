use crate::error::GeoHashError;
use crate::index::bits::GeoHashBits;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the four children of a cell.
///
/// The discriminant is the bit pair appended to the parent code:
/// longitude in the high bit, latitude in the low bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    LeftBottom = 0,
    LeftTop = 1,
    RightBottom = 2,
    RightTop = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::LeftBottom,
        Quadrant::RightBottom,
        Quadrant::LeftTop,
        Quadrant::RightTop,
    ];

    #[inline]
    pub fn suffix(self) -> u64 {
        self as u64
    }
}

impl FromStr for Quadrant {
    type Err = GeoHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "left_bottom" => Ok(Quadrant::LeftBottom),
            "right_bottom" => Ok(Quadrant::RightBottom),
            "left_top" => Ok(Quadrant::LeftTop),
            "right_top" => Ok(Quadrant::RightTop),
            _ => Err(GeoHashError::InvalidQuadrant(s.to_string())),
        }
    }
}

/// Descends one level into `quadrant` of `code`.
///
/// The caller must not descend past step 32; bits shifted out of the top of
/// the integer are lost.
pub fn next_child(code: &GeoHashBits, quadrant: Quadrant) -> GeoHashBits {
    GeoHashBits {
        bits: (code.bits << 2) + quadrant.suffix(),
        step: code.step.saturating_add(1),
    }
}

impl GeoHashBits {
    /// The four children in [`Quadrant::ALL`] order.
    pub fn children(&self) -> [GeoHashBits; 4] {
        Quadrant::ALL.map(|q| next_child(self, q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::encoding::{decode, encode};
    use crate::index::range::{Bounds, Range};

    #[test]
    fn test_child_suffixes() -> Result<(), GeoHashError> {
        let parent = GeoHashBits::new(0b10, 1)?;
        assert_eq!(next_child(&parent, Quadrant::LeftBottom), GeoHashBits::new(0b10_00, 2)?);
        assert_eq!(next_child(&parent, Quadrant::RightBottom), GeoHashBits::new(0b10_10, 2)?);
        assert_eq!(next_child(&parent, Quadrant::LeftTop), GeoHashBits::new(0b10_01, 2)?);
        assert_eq!(next_child(&parent, Quadrant::RightTop), GeoHashBits::new(0b10_11, 2)?);
        Ok(())
    }

    #[test]
    fn test_root_children() -> Result<(), GeoHashError> {
        let root = GeoHashBits::new(0, 0)?;
        let children = root.children();
        for (child, q) in children.iter().zip(Quadrant::ALL) {
            assert_eq!(child.step(), 1);
            assert_eq!(child.bits(), q.suffix());
            assert_eq!(child.parent(), Some(root));
        }
        Ok(())
    }

    #[test]
    fn test_children_tile_parent_exactly() -> Result<(), GeoHashError> {
        let b = Bounds::WGS84;
        let (lat_r, lon_r) = (b.latitude, b.longitude);
        let parent = encode(&lat_r, &lon_r, 48.85, 2.35, 9)?;
        let area = decode(&lat_r, &lon_r, &parent);
        let (lat_mid, lon_mid) = (area.latitude.mid(), area.longitude.mid());

        let lower_lat = Range::new(area.latitude.min, lat_mid)?;
        let upper_lat = Range::new(lat_mid, area.latitude.max)?;
        let left_lon = Range::new(area.longitude.min, lon_mid)?;
        let right_lon = Range::new(lon_mid, area.longitude.max)?;

        let expect = |q: Quadrant| match q {
            Quadrant::LeftBottom => (lower_lat, left_lon),
            Quadrant::RightBottom => (lower_lat, right_lon),
            Quadrant::LeftTop => (upper_lat, left_lon),
            Quadrant::RightTop => (upper_lat, right_lon),
        };

        let mut total = 0.0;
        for q in Quadrant::ALL {
            let child = next_child(&parent, q);
            assert_eq!(child.step(), parent.step() + 1);
            let child_area = decode(&lat_r, &lon_r, &child);
            assert_eq!((child_area.latitude, child_area.longitude), expect(q));
            total += child_area.latitude.width() * child_area.longitude.width();
        }
        let whole = area.latitude.width() * area.longitude.width();
        assert!((total - whole).abs() < whole * 1e-12);
        Ok(())
    }

    #[test]
    fn test_quadrant_parsing() -> Result<(), GeoHashError> {
        assert_eq!("left_bottom".parse::<Quadrant>()?, Quadrant::LeftBottom);
        assert_eq!("Right-Top".parse::<Quadrant>()?, Quadrant::RightTop);
        assert_eq!(
            "middle".parse::<Quadrant>(),
            Err(GeoHashError::InvalidQuadrant("middle".into()))
        );
        Ok(())
    }
}
