use crate::error::GeoHashError;
use crate::index::constants::MERCATOR_EXTENT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two axes of the interleaved code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// A closed interval `[min, max]` over one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Creates a range, rejecting `min > max` and NaN bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, GeoHashError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub(crate) const fn new_unchecked(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<(), GeoHashError> {
        if self.min.is_nan() || self.max.is_nan() || self.min > self.max {
            return Err(GeoHashError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Closed containment; boundary values are inside.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[inline]
    pub fn mid(&self) -> f64 {
        (self.max + self.min) / 2.0
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Halves the range towards `value` and returns the emitted bit.
    ///
    /// Equal distance to both bounds selects the lower half.
    #[inline]
    pub(crate) fn narrow_towards(&mut self, value: f64) -> u64 {
        if self.max - value >= value - self.min {
            self.max = self.mid();
            0
        } else {
            self.min = self.mid();
            1
        }
    }

    /// Halves the range to the half selected by `bit`.
    #[inline]
    pub(crate) fn narrow_by_bit(&mut self, bit: u64) {
        if bit == 0 {
            self.max = self.mid();
        } else {
            self.min = self.mid();
        }
    }
}

/// The latitude and longitude ranges spanning the whole coordinate space.
///
/// Codes are only meaningful relative to the bounds they were encoded with;
/// the bounds are never stored inside the code itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct Bounds {
    pub latitude: Range,
    pub longitude: Range,
}

/// Unchecked wire form of [`Bounds`].
#[derive(Deserialize)]
struct RawBounds {
    latitude: Range,
    longitude: Range,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = GeoHashError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Bounds::new(raw.latitude, raw.longitude)
    }
}

impl Bounds {
    /// Projected (Web Mercator) Earth extent on both axes.
    pub const MERCATOR: Bounds = Bounds {
        latitude: Range::new_unchecked(-MERCATOR_EXTENT, MERCATOR_EXTENT),
        longitude: Range::new_unchecked(-MERCATOR_EXTENT, MERCATOR_EXTENT),
    };

    /// Plain geographic degrees.
    pub const WGS84: Bounds = Bounds {
        latitude: Range::new_unchecked(-90.0, 90.0),
        longitude: Range::new_unchecked(-180.0, 180.0),
    };

    pub fn new(latitude: Range, longitude: Range) -> Result<Self, GeoHashError> {
        let bounds = Self {
            latitude,
            longitude,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<(), GeoHashError> {
        self.latitude.validate()?;
        self.longitude.validate()
    }

    /// Loads bounds from a JSON document such as
    /// `{"latitude":{"min":-90,"max":90},"longitude":{"min":-180,"max":180}}`.
    pub fn from_json(json: &str) -> Result<Self, GeoHashError> {
        let raw: RawBounds =
            serde_json::from_str(json).map_err(|e| GeoHashError::ConfigError(e.to_string()))?;
        Bounds::try_from(raw)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::MERCATOR
    }
}
