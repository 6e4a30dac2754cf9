//! Linker-section record regions.
//!
//! Scattered declaration sites place fixed-layout records into a named linker
//! section. The linker concatenates every input section of that name into one
//! contiguous block and synthesises symbols at both ends. A [`Region`] turns
//! those two addresses into a `&'static [T]`.
//!
//! # Layers
//!
//! - [`layout`]: which record types can be collected at a uniform stride
//! - [`macro@entry`] / [`macro@region`]: the placement attributes (re-exported from `linkset-macros`)
//! - [`boundary`]: the `(first, limit)` pair supplied by the linker
//! - [`Region`]: validation and enumeration of the collected block
//!
//! # Example
//!
//! ```ignore
//! use linkset_region::{Region, entry, region};
//!
//! #[derive(Debug, PartialEq)]
//! pub struct Greeting {
//!     pub name: &'static str,
//!     pub id: u32,
//! }
//!
//! #[region(placeholder = Greeting { name: "", id: 0 })]
//! pub static GREETINGS: Region<Greeting>;
//!
//! #[entry(GREETINGS)]
//! static HELLO: Greeting = Greeting { name: "hello", id: 1 };
//!
//! for greeting in GREETINGS.declared() {
//!     println!("{} => {}", greeting.name, greeting.id);
//! }
//! ```
//!
//! # Ordering
//!
//! Records appear in the order the linker laid out their input sections. That
//! order is stable within one build and unspecified across builds, toolchains
//! and optimisation levels.
//!
//! Zero-sized records are rejected at compile time:
//!
//! ```compile_fail
//! use linkset_region::{Region, region};
//!
//! #[region(placeholder = ())]
//! static NOTHING: Region<()>;
//! ```
//!
//! # Region names
//!
//! The identifier of a region static names its linker section, so it must be
//! unique across everything linked into one binary. A second region with the
//! same name is a build error (a duplicate `linkset_region_<NAME>` symbol), even
//! when the two live in different modules:
//!
//! ```compile_fail
//! use linkset_region::{Region, region};
//!
//! mod ints {
//!     use super::*;
//!
//!     #[region(placeholder = 0)]
//!     pub static SHARED: Region<u64>;
//! }
//!
//! mod floats {
//!     use super::*;
//!
//!     #[region(placeholder = 0.0)]
//!     pub static SHARED: Region<f64>;
//! }
//!
//! fn main() {
//!     println!("{} {}", ints::SHARED.len(), floats::SHARED.len());
//! }
//! ```
//!
//! # Features
//!
//! - `contracts`: re-checks the bounds on every access and asserts they match
//!   the cached validation (`cargo test -p linkset-region --features contracts`).

// Lets the placement macros refer to `::linkset_region` from inside this crate.
extern crate self as linkset_region;

pub mod boundary;
mod error;
pub mod layout;
mod region;

pub use boundary::BoundaryPair;
pub use error::{LayoutError, RegionError};
pub use layout::RecordLayout;
pub use linkset_macros::{entry, region};
pub use region::{Declared, Region};

#[cfg(test)]
mod tests;
