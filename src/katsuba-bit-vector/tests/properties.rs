use katsuba_bit_vector::BitVector;
use proptest::prelude::*;

fn bit_vector(max_len: usize) -> impl Strategy<Value = BitVector> {
    prop::collection::vec(any::<bool>(), 0..max_len).prop_map(BitVector::from_iter)
}

fn is_canonical(bits: &BitVector) -> bool {
    let bytes = bits.as_bytes();
    if bytes.len() != bits.len().div_ceil(8) {
        return false;
    }

    match (bytes.last(), bits.len() % 8) {
        (Some(&last), n) if n != 0 => last & (0xFF >> n) == 0,
        _ => true,
    }
}

proptest! {
    #[test]
    fn canonical_form(bits in bit_vector(200), n in 0..220usize) {
        prop_assert!(is_canonical(&bits));
        prop_assert!(is_canonical(&bits.drop(n)));
        prop_assert!(is_canonical(&bits.take(n)));
        prop_assert!(is_canonical(&bits.not()));
        prop_assert!(is_canonical(&bits.left_shift(n)));
        prop_assert!(is_canonical(&bits.right_shift(n, true)));
    }

    #[test]
    fn take_drop_rejoin(bits in bit_vector(200), n in 0..200usize) {
        let n = n.min(bits.len());
        prop_assert_eq!(bits.take(n).concat(&bits.drop(n)), bits);
    }

    #[test]
    fn concat_laws(a in bit_vector(100), b in bit_vector(100)) {
        let joined = a.concat(&b);

        prop_assert!(is_canonical(&joined));
        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert_eq!(joined.take(a.len()), a.clone());
        prop_assert_eq!(joined.drop(a.len()), b.clone());

        let bits: Vec<bool> = a.iter().chain(b.iter()).collect();
        prop_assert_eq!(joined.iter().collect::<Vec<_>>(), bits);
    }

    #[test]
    fn acquire_matches_take(bits in bit_vector(100), n in 0..120usize) {
        match bits.acquire(n) {
            Ok(acquired) => {
                prop_assert!(n <= bits.len());
                prop_assert_eq!(acquired, bits.take(n));
            }
            Err(_) => prop_assert!(n > bits.len()),
        }
    }

    #[test]
    fn boolean_identities(a in bit_vector(100), b in bit_vector(100)) {
        let len = a.len().min(b.len());
        prop_assert_eq!(a.and(&b).len(), len);
        prop_assert_eq!(a.or(&b).len(), len);
        prop_assert_eq!(a.xor(&b).len(), len);

        prop_assert_eq!(a.xor(&a), BitVector::low(a.len()));
        prop_assert_eq!(a.and(&BitVector::high(a.len())), a.clone());
        prop_assert_eq!(a.or(&BitVector::low(a.len())), a.clone());
        prop_assert_eq!(a.not().not(), a);
    }

    #[test]
    fn shifts(bits in bit_vector(100), n in 0..120usize) {
        let len = bits.len();

        let left = bits.left_shift(n);
        prop_assert_eq!(left.len(), len);
        prop_assert_eq!(left, bits.drop(n).concat(&BitVector::low(n.min(len))));

        let high = BitVector::high(len);
        if n < len {
            prop_assert_eq!(high.right_shift(n, true), high.clone());
        }

        let logical = high.right_shift(n, false);
        prop_assert_eq!(logical.count_zeros(), n.min(len));
        prop_assert_eq!(logical.take(n.min(len)), BitVector::low(n.min(len)));
    }

    #[test]
    fn pad_to_keeps_prefix(bits in bit_vector(100), extra in 0..40usize) {
        let padded = bits.pad_to(bits.len() + extra).unwrap();

        prop_assert_eq!(padded.take(bits.len()), bits.clone());
        prop_assert_eq!(padded.drop(bits.len()), BitVector::low(extra));
    }

    #[test]
    fn conversions(bits in bit_vector(100), value in any::<u64>(), width in 0..=64usize) {
        prop_assert_eq!(BitVector::from_bin(&bits.to_bin()).unwrap(), bits.clone());
        prop_assert_eq!(bits.reverse().reverse(), bits);

        let masked = if width == 64 { value } else { value & ((1 << width) - 1) };
        prop_assert_eq!(BitVector::from_uint(value, width).unwrap().to_uint().unwrap(), masked);
    }
}
