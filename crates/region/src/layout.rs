//! Record layout contract.
//!
//! A type is collectable when values placed back to back by the linker land at
//! exactly `size_of::<T>()` stride, the same stride an array of `T` uses.
//!
//! Rust rounds every size up to a multiple of the alignment and emits statics
//! carrying an explicit `link_section` at exactly the type's alignment, so the
//! only type-level violation left is a zero-sized record. [`RecordLayout::from_raw`]
//! applies the full rule set to layouts described outside the type system.

use core::mem::{align_of, size_of};

use crate::error::{LayoutError, RegionError};

/// Validated size and alignment of a collectable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordLayout {
	size: usize,
	align: usize,
}

impl RecordLayout {
	/// Layout of `T`, if `T` can be collected.
	pub const fn of<T>() -> Result<Self, LayoutError> {
		Self::from_raw(size_of::<T>(), align_of::<T>())
	}

	/// Checks a raw `(size, align)` pair against the collection rules.
	pub const fn from_raw(size: usize, align: usize) -> Result<Self, LayoutError> {
		if !align.is_power_of_two() {
			return Err(LayoutError::InvalidAlign { align });
		}
		if size == 0 {
			return Err(LayoutError::ZeroSized);
		}
		if size % align != 0 {
			return Err(LayoutError::SizeNotMultipleOfAlign { size, align });
		}
		Ok(Self { size, align })
	}

	pub const fn size(self) -> usize {
		self.size
	}

	pub const fn align(self) -> usize {
		self.align
	}

	/// Byte distance between consecutive records. Always equal to [`size`](Self::size).
	pub const fn stride(self) -> usize {
		self.size
	}

	/// Number of records in a region spanning `byte_len` bytes.
	pub fn count(self, region: &'static str, byte_len: usize) -> Result<usize, RegionError> {
		if byte_len % self.stride() != 0 {
			return Err(RegionError::Alignment {
				region,
				byte_len,
				stride: self.stride(),
			});
		}
		Ok(byte_len / self.stride())
	}
}

/// Validates `T` as a record type.
pub const fn validate<T>() -> Result<RecordLayout, LayoutError> {
	RecordLayout::of::<T>()
}

/// Compile-time form of [`validate`].
///
/// The placement attributes expand to `const _: () = assert_collectable::<T>();`
/// so a violation fails the build at the declaration site.
pub const fn assert_collectable<T>() {
	match validate::<T>() {
		Ok(_) => {}
		Err(LayoutError::ZeroSized) => {
			panic!("zero-sized types cannot be collected into a linker region")
		}
		Err(LayoutError::SizeNotMultipleOfAlign { .. }) => {
			panic!("record size is not a multiple of its alignment")
		}
		Err(LayoutError::InvalidAlign { .. }) => panic!("record alignment is not a power of two"),
	}
}
