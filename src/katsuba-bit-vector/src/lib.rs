//! Provides an immutable sequence of bits over packed byte storage.
//!
//! Many of the formats Katsuba works with are not aligned to byte
//! boundaries. [`BitVector`] is the value type used to slice, join
//! and combine such data at the granularity of individual bits.
//!
//! # Representation
//!
//! Bits are stored MSB-first, eight to a byte. Only the final byte
//! of a vector may be partially occupied, and its unused low-order
//! bits are always zero. Equality and hashing can therefore work on
//! the raw bytes directly.
//!
//! Every operation produces a new vector. Storage is reference
//! counted so that clones and byte-aligned slices never copy data.
//!
//! ```
//! use katsuba_bit_vector::BitVector;
//!
//! let bits = BitVector::high(4).concat(&BitVector::low(4));
//! assert_eq!(bits.as_bytes(), &[0xF0]);
//! assert_eq!(bits.drop(2).to_bin(), "110000");
//! ```

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bitwise;

mod convert;

mod error;
pub use error::*;

mod iter;
pub use iter::Iter;

#[cfg(feature = "serde")]
mod serde;

mod structural;

pub mod utils;

mod vector;
pub use vector::BitVector;
