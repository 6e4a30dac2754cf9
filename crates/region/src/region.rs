//! Region enumeration.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::Deref;
use core::{ptr, slice};
use std::sync::OnceLock;

use tracing::{debug, error};

use crate::boundary::BoundaryPair;
use crate::error::RegionError;

/// A linker-collected region of `T` records.
///
/// Declared with [`#[region]`](macro@crate::region) and populated with
/// [`#[entry]`](macro@crate::entry). The region always contains its placeholder
/// record, so the boundary symbols exist even when no entry was linked.
///
/// Bounds are validated on first access and the result is cached. Accessors
/// that return plain values panic on a violated invariant; the `try_` forms
/// return the [`RegionError`] instead.
pub struct Region<T: 'static> {
	name: &'static str,
	bounds: BoundaryPair<T>,
	placeholder: &'static T,
	checked: OnceLock<Result<usize, RegionError>>,
}

// SAFETY: the raw bounds point at immutable, process-lifetime records; sharing
// the region only ever hands out `&'static T`.
unsafe impl<T: Sync + 'static> Sync for Region<T> {}

impl<T: 'static> Region<T> {
	/// Builds a region from linker-supplied bounds.
	///
	/// # Safety
	///
	/// `bounds` must satisfy [`BoundaryPair::new`], and `placeholder` must be a
	/// record placed inside those bounds.
	#[doc(hidden)]
	pub const unsafe fn from_boundary(
		name: &'static str,
		bounds: BoundaryPair<T>,
		placeholder: &'static T,
	) -> Self {
		Self {
			name,
			bounds,
			placeholder,
			checked: OnceLock::new(),
		}
	}

	/// Region name, the identifier of the declaring static.
	pub const fn name(&self) -> &'static str {
		self.name
	}

	/// The linker-supplied `(first, limit)` pair.
	pub const fn boundary(&self) -> BoundaryPair<T> {
		self.bounds
	}

	/// The record placed by the region declaration itself.
	pub const fn placeholder(&self) -> &'static T {
		self.placeholder
	}

	/// Whether `record` is this region's placeholder.
	pub fn is_placeholder(&self, record: &T) -> bool {
		ptr::eq(record, self.placeholder)
	}

	/// All records in linker order, placeholder included.
	pub fn try_as_slice(&self) -> Result<&'static [T], RegionError> {
		let len = self.checked_len()?;
		// SAFETY: `checked_len` verified that `first` is non-null and aligned and
		// that `[first, limit)` holds exactly `len` records. The caller of
		// `from_boundary` guaranteed those records are initialised and immutable
		// for the rest of the process.
		Ok(unsafe { slice::from_raw_parts(self.bounds.first(), len) })
	}

	/// All records in linker order, placeholder included.
	///
	/// # Panics
	///
	/// Panics if the region bounds are invalid.
	pub fn as_slice(&self) -> &'static [T] {
		match self.try_as_slice() {
			Ok(records) => records,
			Err(err) => {
				error!(region = self.name, %err, "linker region invariant violated");
				panic!("{err}");
			}
		}
	}

	/// Records placed by [`#[entry]`](macro@crate::entry), in linker order.
	pub fn declared(&self) -> Declared<T> {
		Declared {
			records: self.as_slice().iter(),
			placeholder: self.placeholder,
		}
	}

	/// Number of records including the placeholder.
	pub fn len(&self) -> usize {
		self.as_slice().len()
	}

	/// Whether the region holds no records at all. A valid region never is.
	pub fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	/// Validates the region without panicking.
	pub fn validate(&self) -> Result<(), RegionError> {
		self.checked_len().map(|_| ())
	}

	#[doc(hidden)]
	pub const fn __typecheck(&self, _record: &T) {}

	fn checked_len(&self) -> Result<usize, RegionError> {
		let cached = *self.checked.get_or_init(|| self.resolve());

		#[cfg(feature = "contracts")]
		assert_eq!(
			self.resolve(),
			cached,
			"linker region {} changed after first validation",
			self.name
		);

		cached
	}

	fn resolve(&self) -> Result<usize, RegionError> {
		let len = self.bounds.check(self.name)?;
		if !self.bounds.encloses(self.placeholder) {
			return Err(RegionError::EmptyRegionAmbiguity { region: self.name });
		}
		debug!(
			region = self.name,
			records = len,
			stride = size_of::<T>(),
			"resolved linker region"
		);
		Ok(len)
	}
}

impl<T: 'static> Deref for Region<T> {
	type Target = [T];

	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<'a, T: 'static> IntoIterator for &'a Region<T> {
	type Item = &'static T;
	type IntoIter = slice::Iter<'static, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.as_slice().iter()
	}
}

impl<T: 'static> fmt::Debug for Region<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Region")
			.field("name", &self.name)
			.field("bounds", &self.bounds)
			.field("records", &self.checked_len())
			.finish()
	}
}

/// Iterator over a region's records, skipping the placeholder.
pub struct Declared<T: 'static> {
	records: slice::Iter<'static, T>,
	placeholder: &'static T,
}

impl<T: 'static> Iterator for Declared<T> {
	type Item = &'static T;

	fn next(&mut self) -> Option<&'static T> {
		let placeholder = self.placeholder;
		self.records.find(|record| !ptr::eq(*record, placeholder))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let upper = self.records.len();
		(upper.saturating_sub(1), Some(upper))
	}
}

impl<T: 'static> DoubleEndedIterator for Declared<T> {
	fn next_back(&mut self) -> Option<&'static T> {
		let placeholder = self.placeholder;
		self.records.rfind(|record| !ptr::eq(*record, placeholder))
	}
}

impl<T: 'static> FusedIterator for Declared<T> {}

impl<T: 'static> Clone for Declared<T> {
	fn clone(&self) -> Self {
		Self {
			records: self.records.clone(),
			placeholder: self.placeholder,
		}
	}
}
