//! Over-aligned records with `'static` references.

use linkset_region::{Region, entry, region};
use pretty_assertions::assert_eq;

#[derive(Debug)]
#[repr(C, align(64))]
pub struct Handler {
	pub name: &'static str,
	pub run: fn(u32) -> u32,
}

fn identity(x: u32) -> u32 {
	x
}

fn double(x: u32) -> u32 {
	x * 2
}

fn square(x: u32) -> u32 {
	x * x
}

#[region(placeholder = Handler { name: "identity", run: identity })]
static HANDLERS: Region<Handler>;

#[entry(HANDLERS)]
static DOUBLE: Handler = Handler {
	name: "double",
	run: double,
};

#[entry(self::HANDLERS)]
static SQUARE: Handler = Handler {
	name: "square",
	run: square,
};

#[test]
fn over_aligned_records_are_packed_at_their_size() {
	assert_eq!(size_of::<Handler>(), 64);
	let records = HANDLERS.as_slice();
	assert_eq!(records.len(), 3);
	assert_eq!(records.as_ptr().addr() % 64, 0);
	for pair in records.windows(2) {
		assert_eq!(pair[1..].as_ptr().addr() - pair.as_ptr().addr(), 64);
	}
}

#[test]
fn function_pointers_survive_placement() {
	let mut results: Vec<(&str, u32)> = HANDLERS.declared().map(|h| (h.name, (h.run)(7))).collect();
	results.sort_unstable();
	assert_eq!(results, vec![("double", 14), ("square", 49)]);
	assert_eq!((HANDLERS.placeholder().run)(7), 7);
}
