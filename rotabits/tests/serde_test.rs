#![cfg(feature = "serde")]

use rotabits::{BitArray, StaticBitArray};

#[test]
fn serializes_as_bit_string() {
    let mut spikes = BitArray::<u8>::new(10);
    spikes.set(1).set(9);
    assert_eq!(serde_json::to_string(&spikes).unwrap(), "\"0100000001\"");
}

#[test]
fn deserializes_into_either_shape() {
    let growable: BitArray<u64> = serde_json::from_str("\"0011_0\"").unwrap();
    assert_eq!(growable.len(), 5);
    assert_eq!(growable.count(), 2);

    let fixed: StaticBitArray<1, u64> = serde_json::from_str("\"00110\"").unwrap();
    assert_eq!(fixed, growable);
}

#[test]
fn json_round_trip() {
    let spikes: BitArray<u32> = (0..200).map(|index| index % 7 == 3).collect();
    let json = serde_json::to_string(&spikes).unwrap();
    let restored: BitArray<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, spikes);
    assert_eq!(restored.count(), spikes.count());
}

#[test]
fn rejects_invalid_text() {
    let error = serde_json::from_str::<BitArray>("\"01a\"").unwrap_err();
    assert!(error.to_string().contains("invalid character 'a' at position 2"));
    assert!(serde_json::from_str::<StaticBitArray<1, u8>>("\"111111111\"").is_err());
}
