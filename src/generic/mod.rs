pub mod map;

pub use btree_slab::generic::Node;
pub use map::IntervalMap;
