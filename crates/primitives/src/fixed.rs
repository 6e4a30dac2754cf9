//! Fixed-width field encoding.
//!
//! Linker-collected records cannot hold variable-length data, so names and
//! similar fields are stored as fixed-size arrays padded with a sentinel.
//! Everything here is `const` so fields can be built in static initializers;
//! an over-long input then fails the build instead of the program.

use core::fmt;

/// Input does not fit the target width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FixedWidthError {
	#[error("input of length {len} does not fit a field of width {width}")]
	TooLong { len: usize, width: usize },
}

/// Copies `input` into an `N`-element array and fills the rest with `pad`.
///
/// # Panics
///
/// Panics if `input` is longer than `N`. In a `const` or `static` initializer
/// this is a compile error.
pub const fn pad_array<T: Copy, const N: usize>(input: &[T], pad: T) -> [T; N] {
	match try_pad_array(input, pad) {
		Ok(out) => out,
		Err(_) => panic!("input is longer than the fixed field width"),
	}
}

/// Fallible form of [`pad_array`].
pub const fn try_pad_array<T: Copy, const N: usize>(
	input: &[T],
	pad: T,
) -> Result<[T; N], FixedWidthError> {
	if input.len() > N {
		return Err(FixedWidthError::TooLong {
			len: input.len(),
			width: N,
		});
	}
	let mut out = [pad; N];
	let mut i = 0;
	while i < input.len() {
		out[i] = input[i];
		i += 1;
	}
	Ok(out)
}

/// UTF-8 text stored in exactly `N` bytes, NUL padded.
///
/// Trailing NUL bytes are padding, so text ending in NUL does not round-trip.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct FixedStr<const N: usize>([u8; N]);

impl<const N: usize> FixedStr<N> {
	/// Byte used to fill unused capacity.
	pub const PAD: u8 = 0;

	/// Encodes `text`, panicking (at compile time in const context) if it is
	/// longer than `N` bytes.
	pub const fn new(text: &str) -> Self {
		Self(pad_array(text.as_bytes(), Self::PAD))
	}

	pub const fn try_new(text: &str) -> Result<Self, FixedWidthError> {
		match try_pad_array(text.as_bytes(), Self::PAD) {
			Ok(bytes) => Ok(Self(bytes)),
			Err(err) => Err(err),
		}
	}

	/// All `N` bytes, padding included.
	pub const fn as_bytes(&self) -> &[u8; N] {
		&self.0
	}

	/// Length of the text, excluding padding.
	pub const fn len(&self) -> usize {
		let mut len = N;
		while len > 0 && self.0[len - 1] == Self::PAD {
			len -= 1;
		}
		len
	}

	pub const fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Fixed capacity in bytes.
	pub const fn capacity(&self) -> usize {
		N
	}

	pub fn as_str(&self) -> &str {
		let text = &self.0[..self.len()];
		match core::str::from_utf8(text) {
			Ok(text) => text,
			// Only reachable if the padding split a code point, which `new` cannot produce.
			Err(err) => core::str::from_utf8(&text[..err.valid_up_to()]).unwrap_or_default(),
		}
	}
}

impl<const N: usize> Default for FixedStr<N> {
	fn default() -> Self {
		Self([Self::PAD; N])
	}
}

impl<const N: usize> AsRef<str> for FixedStr<N> {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl<const N: usize> TryFrom<&str> for FixedStr<N> {
	type Error = FixedWidthError;

	fn try_from(text: &str) -> Result<Self, Self::Error> {
		Self::try_new(text)
	}
}

impl<const N: usize> PartialEq<str> for FixedStr<N> {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl<const N: usize> PartialEq<&str> for FixedStr<N> {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}

impl<const N: usize> fmt::Display for FixedStr<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl<const N: usize> fmt::Debug for FixedStr<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("FixedStr").field(&self.as_str()).finish()
	}
}
