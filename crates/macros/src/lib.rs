//! Procedural macros for linkset regions.
//!
//! Provides the two placement attributes:
//! * `#[region(placeholder = ...)]` - declares a linker-collected region
//! * `#[entry(REGION)]` - places a static record into a region
//!
//! Both expand to paths under `::linkset_region`; depend on that crate, which
//! re-exports these macros, rather than on this one.

use proc_macro::TokenStream;

/// Entry attribute implementation.
mod entry;
/// Region attribute implementation.
mod region;
mod section;

/// Declares a region collecting every record placed with [`macro@entry`].
///
/// ```ignore
/// #[region(placeholder = Command::EMPTY)]
/// pub static COMMANDS: Region<Command>;
/// ```
///
/// Generates:
/// * The boundary symbol declarations for the current target
/// * A `#[used]` placeholder record inside the region, so the boundary symbols
///   exist even when nothing else is linked in
/// * A compile-time layout assertion for the record type
/// * The `Region<T>` static itself
///
/// The region name is the static's identifier and is global to the final link:
/// two regions with the same identifier share one section.
#[proc_macro_attribute]
pub fn region(attr: TokenStream, item: TokenStream) -> TokenStream {
	region::region(attr, item)
}

/// Places a static record into a region declared with [`macro@region`].
///
/// ```ignore
/// #[entry(crate::commands::COMMANDS)]
/// static QUIT: Command = Command::new("quit", 0x51);
/// ```
///
/// The static gains `#[used]` and the target's `link_section`, and a type check
/// ties its type to the region's record type. The region must be named by its
/// declared identifier (the last path segment selects the section), so
/// `use ... as` renames of a region cannot be used here.
#[proc_macro_attribute]
pub fn entry(attr: TokenStream, item: TokenStream) -> TokenStream {
	entry::entry(attr, item)
}
