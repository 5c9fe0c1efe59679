//! Endianness utility functions

/// Read a big-endian u32 from the first four bytes of `bytes`
#[inline]
pub fn u32_from_be_bytes(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a little-endian u32 from the first four bytes of `bytes`
#[inline]
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Write `value` big-endian into the low `out.len()` bytes
///
/// Higher-order bytes that do not fit are dropped, so a 4-byte counter can
/// be written into a 2-byte field. Positions beyond 8 bytes are zero-filled.
pub fn write_be_truncated(value: u64, out: &mut [u8]) {
    let n = out.len();
    for (i, b) in out.iter_mut().enumerate() {
        let shift = 8 * (n - 1 - i);
        *b = if shift < 64 { (value >> shift) as u8 } else { 0 };
    }
}
