//! Slicing and joining of [`BitVector`]s.

use std::iter;

use crate::{
    error::{Error, Result},
    utils, BitVector,
};

impl BitVector {
    /// Removes the first `n` bits from the vector.
    ///
    /// Dropping at least [`BitVector::len`] bits yields an empty vector.
    pub fn drop(&self, n: usize) -> Self {
        if n == 0 {
            return self.clone();
        }
        if n >= self.len() {
            return Self::empty();
        }

        let size = self.len() - n;
        let remaining = self.storage().slice(n >> 3..);

        let k = n & 7;
        if k == 0 {
            return Self::from_shared(size, remaining);
        }

        // Every output byte takes the low `8 - k` bits of one byte and
        // the high `k` bits of its successor. Storage past the end reads
        // as zero.
        let next = remaining.iter().skip(1).chain(iter::once(&0));
        let mut bytes: Vec<u8> = remaining
            .iter()
            .zip(next)
            .map(|(&a, &b)| (a << k) | ((b & utils::top_n_bits(k)) >> (8 - k)))
            .collect();

        // The last byte may have been shifted out entirely.
        if size <= (bytes.len() - 1) * 8 {
            bytes.pop();
        }

        Self::from_vec(size, bytes)
    }

    /// Keeps only the first `n` bits of the vector.
    ///
    /// Taking more bits than available returns the vector unchanged.
    pub fn take(&self, n: usize) -> Self {
        if n >= self.len() {
            return self.clone();
        }

        let nbytes = utils::bytes_needed_for_bits(n);
        if n & 7 == 0 {
            Self::from_shared(n, self.storage().slice(..nbytes))
        } else {
            Self::from_vec(n, self.as_bytes()[..nbytes].to_vec())
        }
    }

    /// Takes exactly `n` bits from the vector.
    ///
    /// Unlike [`BitVector::take`], this fails when fewer than `n` bits
    /// are available.
    pub fn acquire(&self, n: usize) -> Result<Self> {
        if n > self.len() {
            log::debug!("Cannot acquire {n} bits from a {}-bit vector", self.len());
            return Err(Error::InsufficientBits {
                requested: n,
                available: self.len(),
            });
        }

        Ok(self.take(n))
    }

    /// Acquires `n` bits and hands them to `decode`.
    ///
    /// Returns the bits following the decoded ones along with the
    /// decoded value. The first error from either step is returned.
    ///
    /// ```
    /// use katsuba_bit_vector::{BitVector, Error};
    ///
    /// let bits = BitVector::from_bytes(&[0xA5]);
    /// let (rest, nibble) = bits.consume(4, |b| b.to_uint())?;
    ///
    /// assert_eq!(nibble, 0xA);
    /// assert_eq!(rest.to_bin(), "0101");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn consume<T, E, F>(&self, n: usize, decode: F) -> Result<(Self, T), E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<Error>,
    {
        log::trace!("Consuming {n} bits from a {}-bit vector", self.len());

        let head = self.acquire(n)?;
        let value = decode(&head)?;
        Ok((self.drop(n), value))
    }

    /// Extends the vector with cleared bits to a total of `n` bits.
    ///
    /// Fails when `n` is less than the current length.
    pub fn pad_to(&self, n: usize) -> Result<Self> {
        if n < self.len() {
            log::debug!("Refusing to pad a {}-bit vector to {n} bits", self.len());
            return Err(Error::IllegalArgument(
                "cannot pad a vector to fewer bits than it holds",
            ));
        }
        if n == self.len() {
            return Ok(self.clone());
        }

        // Trailing bits are zero already, so growing the storage with
        // zero bytes is all that is needed.
        let mut bytes = self.as_bytes().to_vec();
        bytes.resize(utils::bytes_needed_for_bits(n), 0);
        Ok(Self::from_vec(n, bytes))
    }

    /// Appends `other` to the end of `self`.
    pub fn concat(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let size = self.len() + other.len();
        let valid = utils::valid_bits_in_last_byte(self.len());
        let invalid = 8 - valid;

        if invalid == 0 {
            let mut bytes = Vec::with_capacity(self.as_bytes().len() + other.as_bytes().len());
            bytes.extend_from_slice(self.as_bytes());
            bytes.extend_from_slice(other.as_bytes());
            return Self::from_shared(size, bytes.into());
        }

        // Fill the free low bits of our last byte with the leading
        // bits of `other`, then append whatever is left of it.
        let (init, last) = self.as_bytes().split_at(self.as_bytes().len() - 1);
        let rest = other.drop(invalid);

        let mut bytes = Vec::with_capacity(utils::bytes_needed_for_bits(size));
        bytes.extend_from_slice(init);
        bytes.push(last[0] | (other.as_bytes()[0] >> valid));
        bytes.extend_from_slice(rest.as_bytes());

        Self::from_vec(size, bytes)
    }

    /// Splits the vector into its first `n` bits and the rest.
    pub fn split_at(&self, n: usize) -> (Self, Self) {
        (self.take(n), self.drop(n))
    }
}
