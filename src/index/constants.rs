/// Maximum subdivision depth; a full code occupies all 64 bits.
pub const MAX_STEP: u8 = 32;

/// Half-width of the projected Earth extent used by [`crate::Bounds::MERCATOR`].
pub const MERCATOR_EXTENT: f64 = 20037726.37;

/// Bits holding the longitude axis (the more significant bit of every pair).
pub(crate) const LON_MASK: u64 = 0xaaaa_aaaa_aaaa_aaaa;

/// Bits holding the latitude axis (the less significant bit of every pair).
pub(crate) const LAT_MASK: u64 = 0x5555_5555_5555_5555;

/// Truncates `pattern` to the low `2 * step` bits.
#[inline]
pub(crate) fn window(pattern: u64, step: u8) -> u64 {
    match step {
        0 => 0,
        s if s >= MAX_STEP => pattern,
        s => pattern >> (64 - 2 * u32::from(s)),
    }
}
