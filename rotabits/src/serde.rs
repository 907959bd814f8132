use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::sequence::BitSequence;
use crate::storage::WordArray;

impl<Storage: WordArray> Serialize for BitSequence<Storage> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, Storage: WordArray> Deserialize<'de> for BitSequence<Storage> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(de::Error::custom)
    }
}
