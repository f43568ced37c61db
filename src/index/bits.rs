use crate::error::GeoHashError;
use crate::index::constants::{MAX_STEP, window};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An interleaved cell code.
///
/// Only the low `2 * step` bits are meaningful. Each bit pair holds one
/// subdivision level, longitude in the more significant bit and latitude in
/// the less significant one, with the coarsest level in the highest pair.
///
/// # Example
///
/// ```
/// use geohash_bits::{Bounds, encode, decode};
///
/// # fn main() -> Result<(), geohash_bits::GeoHashError> {
/// let b = Bounds::WGS84;
/// let code = encode(&b.latitude, &b.longitude, 51.5, -0.12, 20)?;
/// assert_eq!(code.step(), 20);
///
/// let area = decode(&b.latitude, &b.longitude, &code);
/// assert!(area.contains(51.5, -0.12));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawBits")]
pub struct GeoHashBits {
    pub(crate) bits: u64,
    pub(crate) step: u8,
}

/// Unchecked wire form of [`GeoHashBits`].
#[derive(Deserialize)]
struct RawBits {
    bits: u64,
    step: u8,
}

impl TryFrom<RawBits> for GeoHashBits {
    type Error = GeoHashError;

    /// Rejects codes with `step > 32` or any bit set above the step window.
    fn try_from(raw: RawBits) -> Result<Self, Self::Error> {
        let code = GeoHashBits::new(raw.bits, raw.step)?;
        if code.bits != raw.bits {
            return Err(GeoHashError::InvalidCode {
                bits: raw.bits,
                step: raw.step,
            });
        }
        Ok(code)
    }
}

impl GeoHashBits {
    /// Creates a code, masking away anything above the `2 * step` bit window.
    pub fn new(bits: u64, step: u8) -> Result<Self, GeoHashError> {
        if step > MAX_STEP {
            return Err(GeoHashError::InvalidStep(step));
        }
        Ok(Self {
            bits: bits & window(u64::MAX, step),
            step,
        })
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    #[inline]
    pub fn step(&self) -> u8 {
        self.step
    }

    /// Returns the bit at `pos`, zero for positions past the integer width.
    #[inline]
    pub(crate) fn bit(&self, pos: u32) -> u64 {
        self.bits.checked_shr(pos).map_or(0, |b| b & 1)
    }

    /// Returns the enclosing cell at a coarser `step`.
    pub fn truncate(&self, step: u8) -> Result<Self, GeoHashError> {
        if step > self.step {
            return Err(GeoHashError::InvalidStep(step));
        }
        let dropped = 2 * u32::from(self.step - step);
        Ok(Self {
            bits: self.bits.checked_shr(dropped).unwrap_or(0),
            step,
        })
    }

    /// The enclosing cell one level up, or `None` at step 0.
    pub fn parent(&self) -> Option<Self> {
        if self.step == 0 {
            return None;
        }
        self.truncate(self.step - 1).ok()
    }

    /// Half-open `[lo, hi)` interval of `target_step` codes inside this cell.
    ///
    /// `hi` is `None` when the interval runs to the end of the 64-bit space.
    pub fn prefix_range(&self, target_step: u8) -> Result<(u64, Option<u64>), GeoHashError> {
        if target_step < self.step || target_step > MAX_STEP {
            return Err(GeoHashError::InvalidStep(target_step));
        }
        let shift = 2 * u32::from(target_step - self.step);
        let lo = (u128::from(self.bits) << shift) as u64;
        let hi = u64::try_from((u128::from(self.bits) + 1) << shift).ok();
        Ok((lo, hi))
    }

    /// True if `other` is this cell or lies inside it.
    pub fn contains(&self, other: &GeoHashBits) -> bool {
        other.step >= self.step
            && other
                .truncate(self.step)
                .is_ok_and(|ancestor| ancestor == *self)
    }
}

impl fmt::Display for GeoHashBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step == 0 {
            return write!(f, "-");
        }
        write!(
            f,
            "{:0width$b}",
            self.bits,
            width = 2 * self.step as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_masks_high_bits() -> Result<(), GeoHashError> {
        let code = GeoHashBits::new(0xff, 2)?;
        assert_eq!(code.bits(), 0x0f);
        assert_eq!(code.step(), 2);

        let full = GeoHashBits::new(u64::MAX, 32)?;
        assert_eq!(full.bits(), u64::MAX);
        Ok(())
    }

    #[test]
    fn test_new_rejects_step_above_32() {
        assert_eq!(GeoHashBits::new(0, 33), Err(GeoHashError::InvalidStep(33)));
    }

    #[test]
    fn test_truncate_and_parent() -> Result<(), GeoHashError> {
        let code = GeoHashBits::new(0b10_01_11, 3)?;
        assert_eq!(code.truncate(1)?, GeoHashBits::new(0b10, 1)?);
        assert_eq!(code.parent(), Some(GeoHashBits::new(0b10_01, 2)?));
        assert_eq!(code.truncate(3)?, code);
        assert!(code.truncate(4).is_err());
        assert_eq!(GeoHashBits::new(0, 0)?.parent(), None);
        Ok(())
    }

    #[test]
    fn test_prefix_range() -> Result<(), GeoHashError> {
        let code = GeoHashBits::new(0b01, 1)?;
        assert_eq!(code.prefix_range(2)?, (0b01_00, Some(0b10_00)));
        assert_eq!(code.prefix_range(1)?, (0b01, Some(0b10)));
        assert!(code.prefix_range(0).is_err());
        assert!(code.prefix_range(33).is_err());

        let top = GeoHashBits::new(0b11, 1)?;
        assert_eq!(top.prefix_range(32)?, (0b11 << 62, None));
        Ok(())
    }

    #[test]
    fn test_contains() -> Result<(), GeoHashError> {
        let parent = GeoHashBits::new(0b10, 1)?;
        let child = GeoHashBits::new(0b10_11, 2)?;
        let other = GeoHashBits::new(0b01_11, 2)?;
        assert!(parent.contains(&child));
        assert!(parent.contains(&parent));
        assert!(!parent.contains(&other));
        assert!(!child.contains(&parent));
        Ok(())
    }

    #[test]
    fn test_deserialize_validates() -> Result<(), serde_json::Error> {
        let code: GeoHashBits = serde_json::from_str(r#"{"bits":3,"step":1}"#)?;
        assert_eq!(code, GeoHashBits { bits: 3, step: 1 });

        let high_bits = serde_json::from_str::<GeoHashBits>(r#"{"bits":255,"step":1}"#);
        assert!(high_bits.is_err());

        let deep = serde_json::from_str::<GeoHashBits>(r#"{"bits":0,"step":33}"#);
        assert!(deep.is_err());
        Ok(())
    }

    #[test]
    fn test_serialize_round_trip() -> Result<(), serde_json::Error> {
        let code = GeoHashBits { bits: u64::MAX, step: 32 };
        let json = serde_json::to_string(&code)?;
        assert_eq!(serde_json::from_str::<GeoHashBits>(&json)?, code);
        Ok(())
    }

    #[test]
    fn test_display_pads_to_step() -> Result<(), GeoHashError> {
        assert_eq!(GeoHashBits::new(0b0010, 2)?.to_string(), "0010");
        assert_eq!(GeoHashBits::new(0, 0)?.to_string(), "-");
        Ok(())
    }
}
