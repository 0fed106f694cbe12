use btree_interval_map::IntervalMap;

fn boundaries(map: &IntervalMap<i32, char>) -> Vec<(i32, char)> {
	map.boundaries().map(|(k, v)| (*k, *v)).collect()
}

fn assert_canonical(map: &IntervalMap<i32, char>) {
	let mut previous_key = None;
	let mut previous_value = *map.default_value();

	for (&key, &value) in map.boundaries() {
		if let Some(previous) = previous_key {
			assert!(previous < key, "boundaries out of order");
		}
		assert_ne!(value, previous_value, "redundant boundary at {}", key);
		previous_key = Some(key);
		previous_value = value;
	}
}

#[test]
fn assign_on_empty_map() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(1, 3, 'B');

	assert_eq!(boundaries(&map), vec![(1, 'B'), (3, 'A')]);
	assert_canonical(&map);
}

#[test]
fn overlapping_assignments() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(1, 3, 'B');
	map.assign(2, 4, 'C');

	assert_eq!(boundaries(&map), vec![(1, 'B'), (2, 'C'), (4, 'A')]);
	assert_canonical(&map);
}

#[test]
fn empty_interval_is_a_no_op() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');
	map.assign(1, 5, 'B');
	let before = boundaries(&map);

	map.assign(3, 3, 'C');
	assert_eq!(boundaries(&map), before);

	map.assign(4, 2, 'C');
	assert_eq!(boundaries(&map), before);
}

#[test]
fn assign_is_idempotent() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');
	map.assign(1, 5, 'B');
	map.assign(3, 8, 'C');
	let before = boundaries(&map);

	map.assign(3, 8, 'C');

	assert_eq!(boundaries(&map), before);
}

#[test]
fn reassigning_the_default_empties_the_map() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(1, 3, 'B');
	map.assign(1, 3, 'A');

	assert_eq!(map.boundary_count(), 0);
}

#[test]
fn assigning_the_default_stores_nothing() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(2, 4, 'A');

	assert_eq!(map.boundary_count(), 0);
}

#[test]
fn same_value_sub_interval_changes_nothing() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(5, 10, 'X');
	map.assign(6, 7, 'X');

	assert_eq!(boundaries(&map), vec![(5, 'X'), (10, 'A')]);
}

#[test]
fn overwrite_at_exact_bounds() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(1, 3, 'B');
	map.assign(1, 3, 'C');

	assert_eq!(boundaries(&map), vec![(1, 'C'), (3, 'A')]);
	assert_canonical(&map);
}

#[test]
fn fragments_a_covering_interval() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(0, 10, 'B');
	map.assign(3, 5, 'C');

	assert_eq!(
		boundaries(&map),
		vec![(0, 'B'), (3, 'C'), (5, 'B'), (10, 'A')]
	);
	assert_canonical(&map);
}

#[test]
fn merges_an_adjacent_same_value_interval() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(0, 5, 'B');
	map.assign(5, 9, 'B');

	assert_eq!(boundaries(&map), vec![(0, 'B'), (9, 'A')]);
	assert_canonical(&map);
}

#[test]
fn keeps_an_adjacent_different_value_interval() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(0, 3, 'B');
	map.assign(3, 6, 'C');

	assert_eq!(boundaries(&map), vec![(0, 'B'), (3, 'C'), (6, 'A')]);
	assert_canonical(&map);
}

#[test]
fn swallows_covered_intervals() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(2, 4, 'B');
	map.assign(6, 8, 'C');
	map.assign(0, 9, 'D');

	assert_eq!(boundaries(&map), vec![(0, 'D'), (9, 'A')]);
	assert_canonical(&map);
}

#[test]
fn extending_an_interval_on_both_sides() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(3, 5, 'B');
	map.assign(1, 8, 'B');

	assert_eq!(boundaries(&map), vec![(1, 'B'), (8, 'A')]);
	assert_canonical(&map);
}

#[test]
fn restores_the_overwritten_value_on_the_right() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(0, 10, 'B');
	map.assign(0, 4, 'C');

	assert_eq!(boundaries(&map), vec![(0, 'C'), (4, 'B'), (10, 'A')]);
	assert_eq!(map.get(4), &'B');
	assert_canonical(&map);
}

#[test]
fn removes_interior_boundaries() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(1, 2, 'B');
	map.assign(3, 4, 'C');
	map.assign(5, 6, 'D');
	map.assign(0, 8, 'E');

	assert_eq!(boundaries(&map), vec![(0, 'E'), (8, 'A')]);
	assert_canonical(&map);
}

#[test]
fn long_sequence_stays_canonical() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	for i in 0..64 {
		let value = match i % 3 {
			0 => 'B',
			1 => 'C',
			_ => 'A'
		};
		map.assign(i, i + 5, value);
		assert_canonical(&map);
	}

	for i in (0..64).rev() {
		map.assign(i, i + 3, 'A');
		assert_canonical(&map);
	}
}
