//! Boundary resolution.
//!
//! A region's extent is described by two addresses the linker supplies:
//! `first`, the address of record 0, and `limit`, one past the last record.
//! Neither is produced by an allocation and neither may be written through or
//! freed. On ELF targets they are the `__start_<section>`/`__stop_<section>`
//! symbols, on Mach-O `section$start$`/`section$end$`, and on Windows two
//! zero-length marker statics in the `$a` and `$c` subsections around the
//! records in `$b`.
//!
//! Only [`BoundaryPair::new`] accepts raw addresses. Everything downstream
//! works on the validated slice.

use core::fmt;

use crate::error::RegionError;
use crate::layout::RecordLayout;

/// The `(first, limit)` address pair bounding a region of `T` records.
pub struct BoundaryPair<T> {
	first: *const T,
	limit: *const T,
}

impl<T> BoundaryPair<T> {
	/// Wraps two linker-supplied addresses.
	///
	/// # Safety
	///
	/// `first` and `limit` must be the start and end addresses of one linker
	/// section that contains only initialised, immutable `T` records laid out
	/// at `size_of::<T>()` stride, and that section must live for the rest of
	/// the process.
	pub const unsafe fn new(first: *const T, limit: *const T) -> Self {
		Self { first, limit }
	}

	pub const fn first(&self) -> *const T {
		self.first
	}

	pub const fn limit(&self) -> *const T {
		self.limit
	}

	/// Bytes between `first` and `limit`, or `None` when the pair is inverted.
	pub fn byte_len(&self) -> Option<usize> {
		self.limit.addr().checked_sub(self.first.addr())
	}

	pub fn is_empty(&self) -> bool {
		self.first == self.limit
	}

	/// Whether `record` sits on a record boundary inside `[first, limit)`.
	pub fn encloses(&self, record: *const T) -> bool {
		let (start, end, addr) = (self.first.addr(), self.limit.addr(), record.addr());
		let stride = size_of::<T>();
		stride != 0 && start <= addr && addr < end && (addr - start) % stride == 0
	}

	/// Validates the pair and returns the number of records it spans.
	pub fn check(&self, region: &'static str) -> Result<usize, RegionError> {
		let layout =
			RecordLayout::of::<T>().map_err(|source| RegionError::Layout { region, source })?;

		if self.first.is_null() || self.limit.is_null() {
			return Err(RegionError::EmptyRegionAmbiguity { region });
		}

		let addr = self.first.addr();
		if addr % layout.align() != 0 {
			return Err(RegionError::Misaligned {
				region,
				addr,
				align: layout.align(),
			});
		}

		let byte_len = self
			.byte_len()
			.ok_or(RegionError::InvertedBounds { region })?;
		layout.count(region, byte_len)
	}
}

impl<T> Clone for BoundaryPair<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for BoundaryPair<T> {}

impl<T> PartialEq for BoundaryPair<T> {
	fn eq(&self, other: &Self) -> bool {
		self.first == other.first && self.limit == other.limit
	}
}

impl<T> Eq for BoundaryPair<T> {}

impl<T> fmt::Debug for BoundaryPair<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BoundaryPair")
			.field("first", &self.first)
			.field("limit", &self.limit)
			.finish()
	}
}
