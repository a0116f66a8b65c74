use std::fmt::{self, Formatter};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::HashSet;

const MAX_PREALLOCATED: usize = 4096;

impl<T: Hash + Eq + Serialize, B: BuildHasher> Serialize for HashSet<T, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct HashSetVisitor<T, B> {
    marker: PhantomData<fn() -> (T, B)>,
}

impl<'de, T, B> Visitor<'de> for HashSetVisitor<T, B>
where
    T: Hash + Eq + Deserialize<'de>,
    B: BuildHasher + Default,
{
    type Value = HashSet<T, B>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        // The hint comes from the input, so preallocation is capped.
        let cap = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED);
        let mut set = HashSet::with_cap_and_hasher(cap, B::default());
        while let Some(item) = seq.next_element()? {
            set.insert(item);
        }
        Ok(set)
    }
}

impl<'de, T, B> Deserialize<'de> for HashSet<T, B>
where
    T: Hash + Eq + Deserialize<'de>,
    B: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(HashSetVisitor {
            marker: PhantomData,
        })
    }
}
