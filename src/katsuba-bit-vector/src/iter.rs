use std::iter::FusedIterator;

use crate::{utils, BitVector};

/// An iterator over the bits of a [`BitVector`], front to back.
///
/// Created by [`BitVector::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    vector: &'a BitVector,
    front: usize,
    back: usize,
}

impl BitVector {
    /// Gets an iterator over the bits of the vector.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            vector: self,
            front: 0,
            back: self.len(),
        }
    }
}

impl Iter<'_> {
    #[inline]
    fn bit(&self, n: usize) -> bool {
        utils::get_bit(self.vector.as_bytes()[n >> 3], n & 7)
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }

        let bit = self.bit(self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<bool> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some(self.bit(self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let iter = iter.into_iter();

        let mut bytes = Vec::with_capacity(utils::bytes_needed_for_bits(iter.size_hint().0));
        let mut size = 0;

        for bit in iter {
            if size & 7 == 0 {
                bytes.push(0);
            }
            if let Some(last) = bytes.last_mut() {
                *last = utils::set_bit(*last, size & 7, bit);
            }
            size += 1;
        }

        Self::from_vec(size, bytes)
    }
}
