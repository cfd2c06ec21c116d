use std::{fmt, ops::Index};

use bytes::Bytes;

use crate::{
    error::{Error, Result},
    utils,
};

/// An immutable sequence of bits.
///
/// Bits are indexed left to right starting at `0`, stored MSB-first
/// in a packed buffer of exactly `ceil(len / 8)` bytes. Bits
/// of the final byte past the end of the vector are always zero.
///
/// All operations return new vectors; cloning is cheap since storage
/// is shared between clones.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitVector {
    size: usize,
    bytes: Bytes,
}

impl BitVector {
    /// Creates a vector of `size` bits from `bytes`.
    ///
    /// Unused bits in the last byte are cleared. Fails when the number
    /// of bytes does not match what `size` bits need.
    pub fn new(size: usize, bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != utils::bytes_needed_for_bits(size) {
            return Err(Error::IllegalArgument(
                "byte count does not match the number of bits",
            ));
        }

        Ok(Self::from_vec(size, bytes))
    }

    // Builds a vector from storage the caller has sized correctly,
    // clearing the trailing bits.
    pub(crate) fn from_vec(size: usize, mut bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), utils::bytes_needed_for_bits(size));

        utils::clear_unneeded_bits(size, &mut bytes);
        Self {
            size,
            bytes: bytes.into(),
        }
    }

    // Wraps storage that is already known to be canonical.
    pub(crate) fn from_shared(size: usize, bytes: Bytes) -> Self {
        debug_assert_eq!(bytes.len(), utils::bytes_needed_for_bits(size));
        debug_assert_eq!(
            bytes.last().map_or(0, |&b| b & !last_byte_mask(size)),
            0
        );

        Self { size, bytes }
    }

    /// Creates an empty vector.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a vector of `size` set bits.
    pub fn high(size: usize) -> Self {
        Self::from_vec(size, vec![0xFF; utils::bytes_needed_for_bits(size)])
    }

    /// Creates a vector of `size` cleared bits.
    pub fn low(size: usize) -> Self {
        Self::from_vec(size, vec![0; utils::bytes_needed_for_bits(size)])
    }

    /// Creates a vector holding a single bit.
    pub fn bit(high: bool) -> Self {
        if high {
            Self::high(1)
        } else {
            Self::low(1)
        }
    }

    /// Creates a vector from a copy of `bytes`, spanning all of its bits.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }

    /// Gets the number of bits in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the vector holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Gets a view of the packed bytes backing the vector.
    ///
    /// A partially used final byte is zero-padded on the right.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    // Gets the shared storage of the vector.
    #[inline]
    pub(crate) fn storage(&self) -> &Bytes {
        &self.bytes
    }

    /// Reads bit `n`, failing when it is out of range.
    pub fn get(&self, n: usize) -> Result<bool> {
        self.lift(n).ok_or(Error::IndexOutOfBounds {
            index: n,
            size: self.size,
        })
    }

    /// Reads bit `n`, or [`None`] when it is out of range.
    #[inline]
    pub fn lift(&self, n: usize) -> Option<bool> {
        (n < self.size).then(|| utils::get_bit(self.bytes[n >> 3], n & 7))
    }

    /// Creates a copy of the vector with bit `n` forced to `high`.
    pub fn updated(&self, n: usize, high: bool) -> Result<Self> {
        if n >= self.size {
            return Err(Error::IndexOutOfBounds {
                index: n,
                size: self.size,
            });
        }

        let mut bytes = self.bytes.to_vec();
        bytes[n >> 3] = utils::set_bit(bytes[n >> 3], n & 7, high);
        Ok(Self::from_shared(self.size, bytes.into()))
    }

    /// Creates a copy of the vector with bit `n` set.
    pub fn set(&self, n: usize) -> Result<Self> {
        self.updated(n, true)
    }

    /// Creates a copy of the vector with bit `n` cleared.
    pub fn clear(&self, n: usize) -> Result<Self> {
        self.updated(n, false)
    }
}

#[inline]
fn last_byte_mask(size: usize) -> u8 {
    utils::top_n_bits(utils::valid_bits_in_last_byte(size))
}

impl Index<usize> for BitVector {
    type Output = bool;

    /// # Panics
    ///
    /// Panics when `index` is out of range.
    fn index(&self, index: usize) -> &bool {
        match self.lift(index) {
            Some(true) => &true,
            Some(false) => &false,
            None => panic!(
                "bit index {index} out of range for vector of {} bits",
                self.size
            ),
        }
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "BitVector(0 bits)")
        } else {
            write!(f, "BitVector({} bits, {})", self.size, self.to_hex())
        }
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
