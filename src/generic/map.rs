use std::fmt;

use cc_traits::{
	SimpleCollectionMut,
	SimpleCollectionRef,
	Slab,
	SlabMut
};
use btree_slab::generic::{
	map::{
		BTreeMap,
		BTreeExt,
		BTreeExtMut
	},
	node::{
		Address,
		Node,
		Item
	}
};

/// Compressed map assigning a value to every key of an ordered key space.
///
/// The map represents a total function: `default` applies below the first
/// stored boundary, and each boundary `(k, v)` switches the value to `v` from
/// `k` up to the next boundary (or forever). Only transition points are
/// stored, and the representation is kept minimal: a boundary never carries
/// the value already in effect just before it.
///
/// The value type's equality is assumed to be an equivalence relation;
/// minimality is not defined otherwise.
pub struct IntervalMap<K, V, C: Slab<Node<K, V>>> {
	default: V,
	btree: BTreeMap<K, V, C>
}

impl<K: Ord, V, C: SimpleCollectionRef + Slab<Node<K, V>>> IntervalMap<K, V, C> {
	/// Create a map equal to `default` over the whole key space.
	pub fn new(default: V) -> IntervalMap<K, V, C> where C: Default {
		IntervalMap {
			default,
			btree: BTreeMap::new()
		}
	}

	/// Value applying below the first boundary.
	pub fn default_value(&self) -> &V {
		&self.default
	}

	/// Number of stored transition points.
	pub fn boundary_count(&self) -> usize {
		self.btree.len()
	}

	/// Stored transition points, in key order.
	pub fn boundaries(&self) -> impl Iterator<Item = (&K, &V)> {
		self.btree.iter()
	}

	/// Look up the value at `key`.
	///
	/// Returns the value of the last boundary with key not greater than
	/// `key`, or the default value if there is none.
	pub fn get(&self, key: K) -> &V {
		match self.boundary_value_below(&key, false) {
			Some(value) => value,
			None => &self.default
		}
	}

	/// Value of the last boundary ordered below `key`.
	///
	/// With `strict`, a boundary at exactly `key` is skipped.
	fn boundary_value_below(&self, key: &K, strict: bool) -> Option<&V> {
		let mut id = self.btree.root_id()?;
		let mut value = None;

		loop {
			match self.btree.node(id) {
				Node::Internal(node) => {
					let branches = node.branches();
					match binary_search(branches, key, strict) {
						Some(i) => {
							let b = &branches[i];
							value = Some(b.item.value());
							id = b.child
						},
						None => {
							id = node.first_child_id()
						}
					}
				},
				Node::Leaf(leaf) => {
					let items = leaf.items();
					return match binary_search(items, key, strict) {
						Some(i) => Some(items[i].value()),
						None => value
					}
				}
			}
		}
	}

	/// Address of the first boundary with key not less than `key`.
	fn lower_bound(&self, key: &K) -> Option<Address> {
		let mut id = self.btree.root_id()?;
		let mut after = None;

		loop {
			match self.btree.node(id) {
				Node::Internal(node) => {
					let branches = node.branches();
					match binary_search(branches, key, false) {
						Some(i) => {
							if branches[i].item.key() == key {
								return Some(Address::new(id, i.into()))
							}

							if i + 1 < branches.len() {
								after = Some(Address::new(id, (i + 1).into()))
							}

							id = branches[i].child
						},
						None => {
							after = Some(Address::new(id, 0usize.into()));
							id = node.first_child_id()
						}
					}
				},
				Node::Leaf(leaf) => {
					let items = leaf.items();
					return match binary_search(items, key, false) {
						Some(i) => {
							if items[i].key() == key {
								Some(Address::new(id, i.into()))
							} else if i + 1 < items.len() {
								Some(Address::new(id, (i + 1).into()))
							} else {
								after
							}
						},
						None => {
							if items.is_empty() {
								after
							} else {
								Some(Address::new(id, 0usize.into()))
							}
						}
					}
				}
			}
		}
	}
}

impl<K: Ord, V, C: SimpleCollectionRef + SimpleCollectionMut + SlabMut<Node<K, V>>> IntervalMap<K, V, C> {
	/// Assign `value` to the half-open interval `[key_begin, key_end)`.
	///
	/// Previous values are overwritten inside the interval and kept
	/// everywhere else. If `!(key_begin < key_end)` the interval is empty and
	/// nothing happens.
	pub fn assign(&mut self, key_begin: K, key_end: K, value: V) where V: PartialEq + Clone {
		if !(key_begin < key_end) {
			return
		}

		// Value in effect just before the interval. It decides whether
		// `key_begin` is a genuine transition point.
		let value_below = match self.boundary_value_below(&key_begin, true) {
			Some(value) => value.clone(),
			None => self.default.clone()
		};

		// Sweep out every boundary inside the interval, tracking the value
		// the function reached just before `key_end`.
		let mut value_at_end = value_below.clone();
		let mut addr = self.lower_bound(&key_begin);
		while let Some(a) = addr {
			match self.btree.item(a) {
				Some(item) if *item.key() < key_end => {
					value_at_end = item.value().clone()
				},
				_ => break
			}

			let (_, next) = self.btree.remove_at(a).unwrap();
			addr = Some(next);
		}

		// A boundary at exactly `key_end` now carrying `value` is redundant.
		// Without a boundary there, the old value must resume at `key_end`.
		let at_end = match addr {
			Some(a) => match self.btree.item(a) {
				Some(item) if *item.key() == key_end => Some((a, item.value() == &value)),
				_ => None
			},
			None => None
		};
		match at_end {
			Some((a, true)) => {
				self.btree.remove_at(a).unwrap();
			},
			Some((_, false)) => (),
			None => {
				if value_at_end != value {
					self.btree.insert(key_end, value_at_end);
				}
			}
		}

		if value_below != value {
			self.btree.insert(key_begin, value);
		}
	}

	#[cfg(feature = "serde")]
	pub(crate) fn insert_boundary(&mut self, key: K, value: V) {
		self.btree.insert(key, value);
	}
}

impl<K: Ord, V: Default, C: Default + SimpleCollectionRef + Slab<Node<K, V>>> Default for IntervalMap<K, V, C> {
	fn default() -> IntervalMap<K, V, C> {
		IntervalMap::new(V::default())
	}
}

impl<K: fmt::Debug, V: fmt::Debug, C: SimpleCollectionRef + Slab<Node<K, V>>> fmt::Debug for IntervalMap<K, V, C> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "IntervalMap({:?}", self.default)?;

		for (key, value) in self.btree.iter() {
			write!(f, ", {:?}: {:?}", key, value)?;
		}

		write!(f, ")")
	}
}

/// Search for the last item ordered below `key`.
///
/// Returns the index of the last item whose key is less than `key` when
/// `strict`, or not greater than `key` otherwise.
pub fn binary_search<K: Ord, V, I: AsRef<Item<K, V>>>(items: &[I], key: &K, strict: bool) -> Option<usize> {
	let below = |item: &I| {
		let k = item.as_ref().key();
		if strict { k < key } else { k <= key }
	};

	if items.is_empty() || !below(&items[0]) {
		None
	} else {
		let mut i = 0;
		let mut j = items.len() - 1;

		if below(&items[j]) {
			return Some(j)
		}

		// invariants:
		// below(items[i])
		// !below(items[j])
		// j > i

		while j - i > 1 {
			let k = (i + j) / 2;

			if below(&items[k]) {
				i = k;
			} else {
				j = k;
			}
		}

		Some(i)
	}
}
