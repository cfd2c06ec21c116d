#![cfg(feature = "serde")]

use katsuba_bit_vector::BitVector;

#[test]
fn serialize_as_digits() -> serde_json::Result<()> {
    let bits = BitVector::from_bin("1011001").unwrap();

    let json = serde_json::to_string(&bits)?;
    assert_eq!(json, "\"1011001\"");
    assert_eq!(serde_json::from_str::<BitVector>(&json)?, bits);

    assert_eq!(serde_json::to_string(&BitVector::empty())?, "\"\"");

    Ok(())
}

#[test]
fn reject_bad_digits() {
    assert!(serde_json::from_str::<BitVector>("\"10x1\"").is_err());
    assert!(serde_json::from_str::<BitVector>("[1, 0]").is_err());
}
