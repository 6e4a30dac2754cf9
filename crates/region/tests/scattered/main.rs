//! Records declared in separate modules collected into one region.

use linkset_primitives::pad_array;
use linkset_region::{Region, region};
use pretty_assertions::assert_eq;
// Package dependencies this test binary does not name.
use linkset_macros as _;
use rstest as _;
use thiserror as _;
use tracing as _;

mod bar;
mod baz;
mod foo;
mod wide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(C)]
pub struct Record {
	pub name: [u8; 16],
	pub id: u32,
}

impl Record {
	pub const fn new(name: &str, id: u32) -> Self {
		Self {
			name: pad_array(name.as_bytes(), 0),
			id,
		}
	}

	pub fn name(&self) -> &str {
		let len = self.name.iter().position(|&b| b == 0).unwrap_or(self.name.len());
		std::str::from_utf8(&self.name[..len]).expect("ascii names")
	}
}

#[region(placeholder = Record::new("", 0))]
pub static RECORDS: Region<Record>;

fn declared_sorted() -> Vec<Record> {
	let mut records: Vec<Record> = RECORDS.declared().copied().collect();
	records.sort();
	records
}

#[test]
fn three_sites_enumerate_to_exactly_three_records() {
	let mut expected = vec![foo::FOO, bar::BAR, baz::BAZ];
	expected.sort();
	assert_eq!(declared_sorted(), expected);
	assert_eq!(RECORDS.len(), 4);
}

#[test]
fn records_are_bit_identical_to_their_initializers() {
	for record in RECORDS.declared() {
		let expected = match record.name() {
			"foo" => foo::FOO,
			"bar" => bar::BAR,
			"baz" => baz::BAZ,
			other => panic!("unexpected record {other:?}"),
		};
		assert_eq!(*record, expected);
	}
	assert_eq!(
		RECORDS.declared().map(|r| r.id).max(),
		Some(0xc0ffe),
	);
}

#[test]
fn order_is_a_permutation_stable_within_the_build() {
	let first: Vec<u32> = RECORDS.iter().map(|r| r.id).collect();
	let second: Vec<u32> = RECORDS.iter().map(|r| r.id).collect();
	assert_eq!(first, second);

	let mut ids = first;
	ids.sort_unstable();
	assert_eq!(ids, vec![0, 0xc0de, 0xdead, 0xc0ffe]);
}

#[test]
fn stride_matches_record_size() {
	let records = RECORDS.as_slice();
	for pair in records.windows(2) {
		let gap = pair[1..].as_ptr().addr() - pair.as_ptr().addr();
		assert_eq!(gap, size_of::<Record>());
	}

	let bounds = RECORDS.boundary();
	assert_eq!(bounds.byte_len(), Some(records.len() * size_of::<Record>()));
	assert_eq!(bounds.first(), records.as_ptr());
}

#[test]
fn placeholder_is_enumerated_but_not_declared() {
	assert_eq!(RECORDS.iter().filter(|r| RECORDS.is_placeholder(r)).count(), 1);
	assert_eq!(*RECORDS.placeholder(), Record::new("", 0));
	assert_eq!(RECORDS.declared().count(), 3);
}
