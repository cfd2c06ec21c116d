//! Conversions between [`BitVector`]s and other representations.

use std::{
    fmt::{self, Write},
    io,
};

use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

use crate::{
    error::{Error, Result},
    utils, BitVector,
};

const BITS_PER_HEX_DIGIT: usize = 4;

impl BitVector {
    /// Reads all remaining bytes from `reader` into a new vector.
    pub fn from_reader<R: io::Read>(mut reader: R) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        log::trace!("Read {} bytes into bit vector", bytes.len());
        Ok(Self::from(bytes))
    }

    /// Copies the packed bytes of the vector into a new [`Vec`].
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Copies the packed bytes of the vector into a fresh buffer.
    ///
    /// The returned [`Bytes`] does not share storage with the vector.
    pub fn as_byte_buffer(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }

    /// Creates a vector from the `nbits` least significant bits of
    /// `value`, most significant bit first.
    ///
    /// Fails when `nbits` exceeds 64.
    pub fn from_uint(value: u64, nbits: usize) -> Result<Self> {
        if nbits > u64::BITS as usize {
            return Err(Error::IllegalArgument("integer width exceeds 64 bits"));
        }
        if nbits == 0 {
            return Ok(Self::empty());
        }

        let mut buf = [0; 8];
        BigEndian::write_u64(&mut buf, value << (u64::BITS as usize - nbits));

        let nbytes = utils::bytes_needed_for_bits(nbits);
        Ok(Self::from_vec(nbits, buf[..nbytes].to_vec()))
    }

    /// Interprets the vector as a big endian unsigned integer.
    ///
    /// Fails when the vector is longer than 64 bits.
    pub fn to_uint(&self) -> Result<u64> {
        if self.len() > u64::BITS as usize {
            return Err(Error::IllegalArgument("vector does not fit in 64 bits"));
        }
        if self.is_empty() {
            return Ok(0);
        }

        let mut buf = [0; 8];
        buf[..self.as_bytes().len()].copy_from_slice(self.as_bytes());

        Ok(BigEndian::read_u64(&buf) >> (u64::BITS as usize - self.len()))
    }

    /// Interprets the vector as a big endian two's complement integer.
    ///
    /// Fails when the vector is longer than 64 bits.
    pub fn to_int(&self) -> Result<i64> {
        self.to_uint()
            .map(|v| utils::sign_extend(v, self.len() as u32))
    }

    /// Parses a string of binary digits.
    ///
    /// An optional `0b` prefix is accepted; whitespace and `_` are
    /// skipped.
    pub fn from_bin(s: &str) -> Result<Self> {
        let (offset, digits) = strip_radix_prefix(s, "0b");

        digits
            .char_indices()
            .filter(|&(_, c)| !is_separator(c))
            .map(|(i, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::InvalidDigit {
                    digit: c,
                    index: offset + i,
                }),
            })
            .collect()
    }

    /// Parses a string of hexadecimal digits, four bits per digit.
    ///
    /// An optional `0x` prefix is accepted; whitespace and `_` are
    /// skipped.
    pub fn from_hex(s: &str) -> Result<Self> {
        let (offset, digits) = strip_radix_prefix(s, "0x");

        let nibbles = digits
            .char_indices()
            .filter(|&(_, c)| !is_separator(c))
            .map(|(i, c)| {
                c.to_digit(16).map(|d| d as u8).ok_or(Error::InvalidDigit {
                    digit: c,
                    index: offset + i,
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        let bytes = nibbles
            .chunks(2)
            .map(|pair| (pair[0] << 4) | pair.get(1).copied().unwrap_or(0))
            .collect();

        Ok(Self::from_vec(nibbles.len() * BITS_PER_HEX_DIGIT, bytes))
    }

    /// Renders the vector as a string of binary digits.
    pub fn to_bin(&self) -> String {
        BinDisplay(self).to_string()
    }

    /// Renders the packed bytes as lowercase hexadecimal digits.
    ///
    /// When the last byte holds no more than four bits, its padding
    /// nibble is left out.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(self.as_bytes().len() * 2);
        for b in self.as_bytes() {
            // Writing to a `String` cannot fail.
            let _ = write!(out, "{b:02x}");
        }

        if matches!(self.len() % 8, 1..=4) {
            out.pop();
        }

        out
    }
}

// Display adapter writing a vector as binary digits.
pub(crate) struct BinDisplay<'a>(pub &'a BitVector);

impl fmt::Display for BinDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|bit| f.write_char(if bit { '1' } else { '0' }))
    }
}

fn strip_radix_prefix<'a>(s: &'a str, prefix: &str) -> (usize, &'a str) {
    match s.strip_prefix(prefix) {
        Some(rest) => (prefix.len(), rest),
        None => (0, s),
    }
}

#[inline]
fn is_separator(c: char) -> bool {
    c == '_' || c.is_whitespace()
}

impl From<Vec<u8>> for BitVector {
    /// Takes ownership of `bytes` without copying; all bits are used.
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes.len() * 8, bytes)
    }
}

impl From<&[u8]> for BitVector {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}
