//! Miscellaneous utilities for addressing bits in bytes.
//!
//! Bits are numbered MSB-first, so bit `0` of a byte is `0x80`.

/// Checks whether bit `n` of `byte` is set.
#[inline]
pub const fn get_bit(byte: u8, n: usize) -> bool {
    debug_assert!(n < 8);
    byte & (0x80 >> n) != 0
}

/// Returns `byte` with bit `n` forced to `high`.
#[inline]
pub const fn set_bit(byte: u8, n: usize, high: bool) -> u8 {
    debug_assert!(n < 8);
    let mask = 0x80 >> n;
    if high {
        byte | mask
    } else {
        byte & !mask
    }
}

/// Builds a mask with the top `n` bits of a byte set.
///
/// `n` may range from `0` (empty mask) to `8` (full mask).
#[inline]
pub const fn top_n_bits(n: usize) -> u8 {
    debug_assert!(n <= 8);
    // Widen first so that `n == 8` does not overflow the shift.
    (0xFF00_u16 >> n) as u8
}

/// Computes how many bytes are needed to store `size` bits.
#[inline]
pub const fn bytes_needed_for_bits(size: usize) -> usize {
    size.div_ceil(8)
}

/// Computes how many bits of the final byte are in use for a
/// vector of `size` bits.
///
/// Whole-byte sizes use all `8` bits of the last byte.
#[inline]
pub const fn valid_bits_in_last_byte(size: usize) -> usize {
    match size % 8 {
        0 => 8,
        n => n,
    }
}

/// Zeroes the bits in the last byte of `bytes` which are not
/// covered by `size`.
pub fn clear_unneeded_bits(size: usize, bytes: &mut [u8]) {
    if let Some(last) = bytes.last_mut() {
        *last &= top_n_bits(valid_bits_in_last_byte(size));
    }
}

/// Sign-extends an `nbits` wide value to [`i64`].
#[inline]
pub fn sign_extend(value: u64, nbits: u32) -> i64 {
    if nbits == 0 {
        return 0;
    }

    let shift = u64::BITS - nbits;
    (value << shift) as i64 >> shift
}
