use std::marker::PhantomData;

use btree_slab::generic::Node;
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use serde::{
	de::Error,
	ser::{SerializeSeq, SerializeTuple},
	Deserialize, Serialize,
};

use crate::generic;

struct Boundaries<'a, K, V, C: Slab<Node<K, V>>>(&'a generic::IntervalMap<K, V, C>);

impl<'a, K: Ord + Serialize, V: Serialize, C: SimpleCollectionRef + Slab<Node<K, V>>> Serialize
	for Boundaries<'a, K, V, C>
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.0.boundary_count()))?;

		for boundary in self.0.boundaries() {
			seq.serialize_element(&boundary)?;
		}

		seq.end()
	}
}

impl<K: Ord + Serialize, V: Serialize, C: SimpleCollectionRef + Slab<Node<K, V>>> Serialize
	for generic::IntervalMap<K, V, C>
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut t = serializer.serialize_tuple(2)?;
		t.serialize_element(self.default_value())?;
		t.serialize_element(&Boundaries(self))?;
		t.end()
	}
}

impl<
		'de,
		K: Ord + Deserialize<'de>,
		V: PartialEq + Deserialize<'de>,
		C: Default + SimpleCollectionRef + SimpleCollectionMut + SlabMut<Node<K, V>>,
	> Deserialize<'de> for generic::IntervalMap<K, V, C>
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<K, V, C>(PhantomData<(K, V, C)>);

		impl<
				'de,
				K: Ord + Deserialize<'de>,
				V: PartialEq + Deserialize<'de>,
				C: Default + SimpleCollectionRef + SimpleCollectionMut + SlabMut<Node<K, V>>,
			> serde::de::Visitor<'de> for Visitor<K, V, C>
		{
			type Value = generic::IntervalMap<K, V, C>;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "an interval map")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: serde::de::SeqAccess<'de>,
			{
				let default: V = seq
					.next_element()?
					.ok_or_else(|| A::Error::custom("missing default value"))?;
				let boundaries: Vec<(K, V)> = seq
					.next_element()?
					.ok_or_else(|| A::Error::custom("missing boundaries"))?;

				let mut previous_key = None;
				let mut previous_value = &default;
				for (key, value) in &boundaries {
					if previous_key.map_or(false, |previous| previous >= key) {
						return Err(A::Error::custom("boundaries out of order"));
					}
					if value == previous_value {
						return Err(A::Error::custom("redundant boundary"));
					}
					previous_key = Some(key);
					previous_value = value;
				}

				let mut result = generic::IntervalMap::new(default);
				for (key, value) in boundaries {
					result.insert_boundary(key, value);
				}

				Ok(result)
			}
		}

		deserializer.deserialize_tuple(2, Visitor(PhantomData))
	}
}
