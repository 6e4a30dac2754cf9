/// A record type cannot be collected at a uniform stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
	/// Zero-sized records have no stride.
	#[error("zero-sized records cannot be collected")]
	ZeroSized,
	/// Consecutive records would not sit at exactly `size` bytes apart.
	#[error("record size {size} is not a multiple of its alignment {align}")]
	SizeNotMultipleOfAlign { size: usize, align: usize },
	/// Alignment must be a non-zero power of two.
	#[error("record alignment {align} is not a power of two")]
	InvalidAlign { align: usize },
}

/// A linker region violates its boundary invariants.
///
/// Every variant is a build defect: the placement attributes, the record
/// layout, or the toolchain produced a region that cannot be enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
	/// Region length is not a whole number of records.
	#[error("region {region}: length {byte_len} is not a multiple of the record size {stride}")]
	Alignment {
		region: &'static str,
		byte_len: usize,
		stride: usize,
	},
	/// The first record is not aligned for the record type.
	#[error("region {region}: first record at {addr:#x} is not aligned to {align}")]
	Misaligned {
		region: &'static str,
		addr: usize,
		align: usize,
	},
	/// The limit symbol sits before the first symbol.
	#[error("region {region}: limit precedes the first record")]
	InvertedBounds { region: &'static str },
	/// The boundary symbols do not enclose the region's placeholder record.
	#[error("region {region}: boundary symbols do not enclose the placeholder record")]
	EmptyRegionAmbiguity { region: &'static str },
	/// The record type itself cannot be collected.
	#[error("region {region}: {source}")]
	Layout {
		region: &'static str,
		source: LayoutError,
	},
}

impl RegionError {
	/// Name of the region the error was raised for.
	pub fn region(&self) -> &'static str {
		match self {
			Self::Alignment { region, .. }
			| Self::Misaligned { region, .. }
			| Self::InvertedBounds { region }
			| Self::EmptyRegionAmbiguity { region }
			| Self::Layout { region, .. } => region,
		}
	}
}
