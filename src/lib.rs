//! An *interval map* is a map assigning a value to every key of an ordered
//! key space, stored compactly: instead of one entry per key, only the points
//! where the assigned value changes are kept. Every time you need to attach
//! values to large runs of consecutive keys, an interval map should be used.
//!
//! This library provides an interval map implementation based on
//! [`btree-slab`](https://crates.io/crates/btree-slab)'s B-tree.
//! It defines a single type `IntervalMap<K, V>`.
//!
//! ## Usage
//!
//! A map is created from a default value covering the whole key space.
//! `assign` overwrites a half-open interval `[begin, end)` and `get` looks up
//! a single key.
//!
//! ```
//! use btree_interval_map::IntervalMap;
//!
//! let mut map: IntervalMap<i32, char> = IntervalMap::new('A');
//! map.assign(1, 3, 'B');
//! map.assign(2, 4, 'C');
//! assert_eq!(map.get(0), &'A');
//! assert_eq!(map.get(1), &'B');
//! assert_eq!(map.get(2), &'C');
//! assert_eq!(map.get(3), &'C');
//! assert_eq!(map.get(4), &'A');
//! ```
//!
//! Assigning an empty or reversed interval does nothing:
//!
//! ```
//! # use btree_interval_map::IntervalMap;
//! # let mut map: IntervalMap<i32, char> = IntervalMap::new('A');
//! map.assign(5, 5, 'B');
//! map.assign(7, 2, 'B');
//! assert_eq!(map.boundary_count(), 0);
//! ```
//!
//! ## Canonical representation
//!
//! The stored boundary sequence is always minimal: two consecutive boundaries
//! never carry the same value, and no boundary carries the value already in
//! effect just before it. Assignments that change nothing store nothing.
//!
//! ```
//! use btree_interval_map::IntervalMap;
//!
//! let mut map: IntervalMap<u32, char> = IntervalMap::new('A');
//! map.assign(5, 10, 'X');
//! map.assign(6, 7, 'X');
//! let boundaries: Vec<_> = map.boundaries().map(|(k, v)| (*k, *v)).collect();
//! assert_eq!(boundaries, vec![(5, 'X'), (10, 'A')]);
//! ```
//!
//! The key type only needs a total order (`Ord`), the value type only
//! equality (`PartialEq`) and `Clone`. Lookup is `O(log n)` and assignment
//! `O(log n + k)` in the number `n` of stored boundaries and the number `k`
//! of boundaries overwritten.
pub mod generic;

#[cfg(feature = "serde")]
mod serde;

pub type DefaultContainer<K, V> = slab::Slab<generic::Node<K, V>>;

pub type IntervalMap<K, V> = generic::IntervalMap<K, V, DefaultContainer<K, V>>;
