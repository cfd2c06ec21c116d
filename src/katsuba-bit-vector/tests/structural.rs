use katsuba_bit_vector::{BitVector, Error};

#[test]
fn drop_and_take() -> Result<(), Error> {
    let bits = BitVector::from_bytes(&[0xFF]);

    let dropped = bits.drop(3);
    assert_eq!(dropped, BitVector::high(5));
    assert_eq!(dropped.to_string(), "BitVector(5 bits, f8)");

    assert_eq!(bits.drop(0), bits);
    assert_eq!(bits.drop(8), BitVector::empty());
    assert_eq!(bits.drop(100), BitVector::empty());

    assert_eq!(bits.take(0), BitVector::empty());
    assert_eq!(bits.take(100), bits);

    let bits = BitVector::from_hex("a5c3")?;
    assert_eq!(bits.take(5).to_bin(), "10100");
    assert_eq!(bits.drop(5).to_bin(), "10111000011");

    Ok(())
}

#[test]
fn acquire_exact() -> Result<(), Error> {
    let bits = BitVector::from_bin("110101")?;

    assert_eq!(bits.acquire(6)?, bits);
    assert_eq!(bits.acquire(2)?.to_bin(), "11");
    assert_eq!(
        bits.acquire(7),
        Err(Error::InsufficientBits {
            requested: 7,
            available: 6
        })
    );

    Ok(())
}

#[test]
fn consume_decodes() -> Result<(), Error> {
    let bits = BitVector::from_hex("f0a")?;

    let (rest, head) = bits.consume(4, |b| b.to_uint())?;
    assert_eq!(head, 0xF);

    let (rest, next) = rest.consume(8, |b| b.to_uint())?;
    assert_eq!(next, 0x0A);
    assert!(rest.is_empty());

    Ok(())
}

#[derive(Debug, PartialEq)]
enum DecodeError {
    Bits(Error),
    Zero,
}

impl From<Error> for DecodeError {
    fn from(value: Error) -> Self {
        Self::Bits(value)
    }
}

#[test]
fn consume_propagates_first_failure() {
    let bits = BitVector::low(4);

    let short = bits.consume(5, |_| Ok::<_, DecodeError>(()));
    assert_eq!(
        short,
        Err(DecodeError::Bits(Error::InsufficientBits {
            requested: 5,
            available: 4
        }))
    );

    let mut called = false;
    let _ = bits.consume(5, |_| {
        called = true;
        Ok::<_, DecodeError>(())
    });
    assert!(!called);

    let failed = bits.consume(2, |b| {
        if b.count_ones() == 0 {
            Err(DecodeError::Zero)
        } else {
            Ok(())
        }
    });
    assert_eq!(failed, Err(DecodeError::Zero));
}

#[test]
fn pad_to_extends() -> Result<(), Error> {
    let bits = BitVector::from_bin("101")?;

    assert_eq!(bits.pad_to(3)?, bits);

    let padded = bits.pad_to(12)?;
    assert_eq!(padded.len(), 12);
    assert_eq!(padded.to_bin(), "101000000000");
    assert_eq!(padded.as_bytes(), &[0xA0, 0x00]);

    assert!(matches!(bits.pad_to(2), Err(Error::IllegalArgument(_))));

    Ok(())
}

#[test]
fn concat() -> Result<(), Error> {
    let joined = BitVector::high(4).concat(&BitVector::low(4));
    assert_eq!(joined.len(), 8);
    assert_eq!(joined.to_hex(), "f0");

    let x = BitVector::from_bin("1100111")?;
    assert_eq!(BitVector::empty().concat(&x), x);
    assert_eq!(x.concat(&BitVector::empty()), x);

    let aligned = BitVector::from_bytes(&[0x12]).concat(&BitVector::from_bin("1")?);
    assert_eq!(aligned.as_bytes(), &[0x12, 0x80]);

    let long = x.concat(&BitVector::from_hex("abcdef")?);
    assert_eq!(long.len(), 31);
    assert_eq!(long.to_bin(), "1100111101010111100110111101111");

    Ok(())
}

#[test]
fn split() -> Result<(), Error> {
    let bits = BitVector::from_bin("1110010")?;
    let (head, tail) = bits.split_at(3);

    assert_eq!(head.to_bin(), "111");
    assert_eq!(tail.to_bin(), "0010");
    assert_eq!(head.concat(&tail), bits);

    Ok(())
}
