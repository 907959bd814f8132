use proptest::prelude::*;
use rotabits::BitArray;

fn equal_length_bits(max_length: usize) -> impl Strategy<Value = (Vec<bool>, Vec<bool>)> {
    (0..max_length).prop_flat_map(|length| {
        (
            prop::collection::vec(any::<bool>(), length),
            prop::collection::vec(any::<bool>(), length),
        )
    })
}

proptest! {
    #[test]
    fn common((left, right) in equal_length_bits(2000)) {
        let expected = (0..left.len()).filter(|&index| left[index] && right[index]).count();
        let left: BitArray = left.into_iter().collect();
        let right: BitArray = right.into_iter().collect();
        assert_eq!(left.common(&right), expected);
        assert_eq!(right.common(&left), expected);
    }

    #[test]
    fn union_count((left, right) in equal_length_bits(2000)) {
        let expected = (0..left.len()).filter(|&index| left[index] || right[index]).count();
        let left: BitArray<u8> = left.into_iter().collect();
        let right: BitArray<u8> = right.into_iter().collect();
        assert_eq!(left.union_count(&right), expected);
        assert_eq!(left.union_count(&right) + left.common(&right), left.count() + right.count());
    }

    #[test]
    fn common_with_self_is_count(bits in prop::collection::vec(any::<bool>(), 0..2000)) {
        let sequence: BitArray<u32> = bits.into_iter().collect();
        assert_eq!(sequence.common(&sequence), sequence.count());
        assert_eq!(sequence.recount(), sequence.count());
    }

    #[test]
    fn rotation_preserves_common((left, right) in equal_length_bits(1000), amount in 0..2000usize) {
        prop_assume!(!left.is_empty());
        let left: BitArray = left.into_iter().collect();
        let right: BitArray = right.into_iter().collect();
        assert_eq!(left.rotated(amount).common(&right.rotated(amount)), left.common(&right));
    }
}

#[test]
fn disjoint_sequences_share_nothing() {
    let even: BitArray<u16> = "10".repeat(50).parse().unwrap();
    let odd: BitArray<u16> = "01".repeat(50).parse().unwrap();
    assert_eq!(even.common(&odd), 0);
    assert_eq!(even.union_count(&odd), 100);
    assert_eq!(even.rotated(1), odd);
    assert_eq!(even.rotated(1).common(&odd), 50);
}
