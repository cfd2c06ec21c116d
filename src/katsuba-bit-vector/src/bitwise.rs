//! Shifts and boolean algebra over [`BitVector`]s.

use std::ops;

use crate::{utils, BitVector};

impl BitVector {
    /// Shifts all bits `n` places to the left, keeping the length.
    ///
    /// Bits shifted past the start are discarded and cleared bits are
    /// shifted in at the end.
    pub fn left_shift(&self, n: usize) -> Self {
        if n == 0 {
            self.clone()
        } else if n >= self.len() {
            Self::low(self.len())
        } else {
            self.drop(n).concat(&Self::low(n))
        }
    }

    /// Shifts all bits `n` places to the right, keeping the length.
    ///
    /// With `sign_extension`, the vacated bits replicate the first bit
    /// of the vector. Otherwise they are cleared.
    pub fn right_shift(&self, n: usize, sign_extension: bool) -> Self {
        if n == 0 || self.is_empty() {
            return self.clone();
        }

        let high = sign_extension && self[0];
        let fill = |len| if high { Self::high(len) } else { Self::low(len) };

        if n >= self.len() {
            fill(self.len())
        } else {
            fill(n).concat(&self.take(self.len() - n))
        }
    }

    /// Inverts every bit of the vector.
    pub fn not(&self) -> Self {
        let bytes = self.as_bytes().iter().map(|&b| !b).collect();
        Self::from_vec(self.len(), bytes)
    }

    /// Computes the bitwise AND of `self` and `other`.
    ///
    /// The longer operand is truncated to the length of the shorter.
    pub fn and(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a & b)
    }

    /// Computes the bitwise OR of `self` and `other`.
    ///
    /// The longer operand is truncated to the length of the shorter.
    pub fn or(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a | b)
    }

    /// Computes the bitwise XOR of `self` and `other`.
    ///
    /// The longer operand is truncated to the length of the shorter.
    pub fn xor(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a ^ b)
    }

    fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(u8, u8) -> u8,
    {
        let size = self.len().min(other.len());
        let nbytes = utils::bytes_needed_for_bits(size);

        let lhs = &self.as_bytes()[..nbytes];
        let rhs = &other.as_bytes()[..nbytes];
        let bytes = lhs.iter().zip(rhs).map(|(&a, &b)| f(a, b)).collect();

        Self::from_vec(size, bytes)
    }

    /// Reverses the order of bits in the vector.
    pub fn reverse(&self) -> Self {
        let bytes: Vec<u8> = self
            .as_bytes()
            .iter()
            .rev()
            .map(|b| b.reverse_bits())
            .collect();

        // Padding of the last byte now leads the first one.
        let padding = bytes.len() * 8 - self.len();
        Self::from(bytes).drop(padding)
    }

    /// Counts the set bits in the vector.
    pub fn count_ones(&self) -> usize {
        self.as_bytes()
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum()
    }

    /// Counts the cleared bits in the vector.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }
}

impl ops::Not for BitVector {
    type Output = BitVector;

    fn not(self) -> BitVector {
        BitVector::not(&self)
    }
}

impl ops::Not for &BitVector {
    type Output = BitVector;

    fn not(self) -> BitVector {
        BitVector::not(self)
    }
}

macro_rules! binary_op_impl {
    ($($trait:ident::$fn:ident => $method:ident),* $(,)*) => {
        $(
            impl ops::$trait for BitVector {
                type Output = BitVector;

                #[inline]
                fn $fn(self, rhs: BitVector) -> BitVector {
                    BitVector::$method(&self, &rhs)
                }
            }

            impl ops::$trait<&BitVector> for &BitVector {
                type Output = BitVector;

                #[inline]
                fn $fn(self, rhs: &BitVector) -> BitVector {
                    BitVector::$method(self, rhs)
                }
            }
        )*
    };
}

binary_op_impl! {
    BitAnd::bitand => and,
    BitOr::bitor => or,
    BitXor::bitxor => xor,
}

impl ops::Shl<usize> for &BitVector {
    type Output = BitVector;

    fn shl(self, rhs: usize) -> BitVector {
        self.left_shift(rhs)
    }
}

impl ops::Shl<usize> for BitVector {
    type Output = BitVector;

    fn shl(self, rhs: usize) -> BitVector {
        self.left_shift(rhs)
    }
}

/// Arithmetic right shift, extending the sign bit.
impl ops::Shr<usize> for &BitVector {
    type Output = BitVector;

    fn shr(self, rhs: usize) -> BitVector {
        self.right_shift(rhs, true)
    }
}

/// Arithmetic right shift, extending the sign bit.
impl ops::Shr<usize> for BitVector {
    type Output = BitVector;

    fn shr(self, rhs: usize) -> BitVector {
        self.right_shift(rhs, true)
    }
}
