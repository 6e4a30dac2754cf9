use linkset_primitives as _;
use pretty_assertions::assert_eq;

use crate::{BoundaryPair, Region, RegionError, entry, region};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Probe {
	tag: u16,
	weight: u16,
}

#[region(placeholder = Probe { tag: 0, weight: 0 })]
static PROBES: Region<Probe>;

#[entry(PROBES)]
static LIGHT: Probe = Probe { tag: 1, weight: 10 };

#[entry(PROBES)]
static HEAVY: Probe = Probe { tag: 2, weight: 900 };

#[region(placeholder = 0)]
static LONELY: Region<u64>;

fn leaked<T>(records: Vec<T>) -> &'static [T] {
	Box::leak(records.into_boxed_slice())
}

fn region_over<T: 'static>(records: &'static [T], placeholder: &'static T) -> Region<T> {
	let range = records.as_ptr_range();
	// SAFETY: `records` is leaked, immutable and laid out as a slice.
	unsafe {
		Region::from_boundary(
			"synthetic",
			BoundaryPair::new(range.start, range.end),
			placeholder,
		)
	}
}

#[test]
fn linked_region_collects_entries_and_placeholder() {
	assert_eq!(PROBES.name(), "PROBES");
	assert_eq!(PROBES.len(), 3);

	let mut tags: Vec<u16> = PROBES.declared().map(|p| p.tag).collect();
	tags.sort_unstable();
	assert_eq!(tags, vec![1, 2]);

	assert!(PROBES.iter().any(|p| PROBES.is_placeholder(p)));
	assert!(PROBES.declared().all(|p| !PROBES.is_placeholder(p)));
}

#[test]
fn entries_are_the_declared_statics() {
	assert!(PROBES.declared().any(|p| core::ptr::eq(p, &LIGHT)));
	assert!(PROBES.declared().any(|p| core::ptr::eq(p, &HEAVY)));
}

#[test]
fn placeholder_only_region_holds_one_record() {
	assert_eq!(LONELY.as_slice(), &[0u64]);
	assert!(LONELY.is_placeholder(&LONELY[0]));
	assert_eq!(LONELY.declared().count(), 0);
}

#[test]
fn region_length_is_a_whole_number_of_records() {
	let pair = PROBES.boundary();
	let byte_len = pair.byte_len().expect("ordered bounds");
	assert_eq!(byte_len % size_of::<Probe>(), 0);
	assert_eq!(byte_len / size_of::<Probe>(), PROBES.len());
}

#[test]
fn enumeration_is_restartable() {
	let first = PROBES.try_as_slice().expect("valid region");
	let second = PROBES.try_as_slice().expect("valid region");
	assert!(core::ptr::eq(first, second));
	assert_eq!(first, second);

	let forward: Vec<_> = PROBES.declared().collect();
	let mut backward: Vec<_> = PROBES.declared().rev().collect();
	backward.reverse();
	assert_eq!(forward, backward);
}

#[test]
fn declared_skips_placeholder_anywhere() {
	let records = leaked(vec![7u32, 0, 9]);
	let region = region_over(records, &records[1]);
	assert_eq!(region.declared().copied().collect::<Vec<_>>(), vec![7, 9]);
	assert_eq!(region.len(), 3);
}

#[test]
fn missing_placeholder_is_an_ambiguous_region() {
	let records = leaked(vec![1u32, 2]);
	let stray: &'static u32 = Box::leak(Box::new(0));
	let region = region_over(records, stray);
	assert_eq!(
		region.try_as_slice(),
		Err(RegionError::EmptyRegionAmbiguity { region: "synthetic" })
	);
}

#[test]
fn empty_bounds_are_an_ambiguous_region() {
	let records: &'static [u32] = leaked(vec![5]);
	let start = records.as_ptr();
	// SAFETY: the empty pair is validated, never dereferenced.
	let region = unsafe {
		Region::from_boundary("synthetic", BoundaryPair::new(start, start), &records[0])
	};
	assert_eq!(
		region.validate(),
		Err(RegionError::EmptyRegionAmbiguity { region: "synthetic" })
	);
}

#[test]
#[should_panic(expected = "not a multiple of the record size")]
fn partial_record_fails_fast() {
	let records = leaked(vec![1u32, 2, 3]);
	let start = records.as_ptr();
	let limit = start.cast::<u8>().wrapping_add(10).cast::<u32>();
	// SAFETY: validation rejects the pair before any record is read.
	let region = unsafe { Region::from_boundary("synthetic", BoundaryPair::new(start, limit), &records[0]) };
	let _ = region.as_slice();
}

#[test]
fn concurrent_readers_see_the_same_records() {
	let expected: Vec<Probe> = PROBES.iter().copied().collect();
	std::thread::scope(|scope| {
		let handles: Vec<_> = (0..8)
			.map(|_| scope.spawn(|| PROBES.iter().copied().collect::<Vec<_>>()))
			.collect();
		for handle in handles {
			assert_eq!(handle.join().expect("reader thread"), expected);
		}
	});
}

mod ints {
	use super::*;

	#[region(placeholder = 0)]
	pub static WORDS: Region<u64>;

	#[entry(WORDS)]
	static EXPONENT_BIT: u64 = 0x4000_0000_0000_0000;
}

mod floats {
	use super::*;

	#[region(placeholder = 0.0)]
	pub static HALVES: Region<f64>;

	#[entry(HALVES)]
	static ONE_AND_A_HALF: f64 = 1.5;
}

#[test]
fn sibling_regions_never_share_records() {
	let words: Vec<u64> = ints::WORDS.declared().copied().collect();
	let halves: Vec<f64> = floats::HALVES.declared().copied().collect();
	assert_eq!(words, vec![0x4000_0000_0000_0000]);
	assert_eq!(halves, vec![1.5]);
	assert_eq!(ints::WORDS.len(), 2);
	assert_eq!(floats::HALVES.len(), 2);
}

#[cfg(feature = "contracts")]
mod contracts {
	use super::*;

	#[test]
	fn recheck_agrees_with_the_cached_validation() {
		for _ in 0..3 {
			assert_eq!(PROBES.validate(), Ok(()));
			assert_eq!(PROBES.len(), 3);
			assert_eq!(PROBES.declared().count(), 2);
		}
	}

	#[test]
	fn recheck_repeats_the_cached_error() {
		let records = leaked(vec![1u32, 2]);
		let stray: &'static u32 = Box::leak(Box::new(0));
		let region = region_over(records, stray);
		let expected = Err(RegionError::EmptyRegionAmbiguity { region: "synthetic" });
		assert_eq!(region.validate(), expected);
		assert_eq!(region.validate(), expected);
	}
}
