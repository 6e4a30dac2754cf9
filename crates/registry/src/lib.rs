//! Keyed lookup over linker-collected regions.
//!
//! A [`Registry`] wraps a [`Region`] whose records implement [`Keyed`] and
//! answers lookups by key or alias. The index is built once, on first use,
//! from the region's declared records (the placeholder is never indexed).
//!
//! ```ignore
//! use linkset_registry::{Keyed, Region, Registry, entry, region};
//!
//! pub struct Command {
//!     pub name: &'static str,
//!     pub aliases: &'static [&'static str],
//! }
//!
//! impl Keyed for Command {
//!     fn key(&self) -> &str {
//!         self.name
//!     }
//!
//!     fn aliases(&self) -> &[&'static str] {
//!         self.aliases
//!     }
//! }
//!
//! #[region(placeholder = Command { name: "", aliases: &[] })]
//! pub static COMMANDS: Region<Command>;
//!
//! pub static REGISTRY: Registry<Command> = Registry::new(&COMMANDS);
//!
//! #[entry(COMMANDS)]
//! static WRITE: Command = Command { name: "write", aliases: &["w"] };
//!
//! assert!(REGISTRY.find("w").is_some());
//! ```
//!
//! # Duplicates
//!
//! Region order is decided by the linker, so duplicate keys are resolved by a
//! [`DuplicatePolicy`] rather than by declaration order in source. Keys always
//! win over aliases. Every resolved conflict is recorded as a [`Collision`].

mod collision;
mod error;
mod index;
mod keyed;
mod registry;

pub use collision::{Collision, DuplicatePolicy, KeyKind, Resolution};
pub use error::RegistryError;
pub use keyed::Keyed;
pub use linkset_region::{Region, entry, region};
pub use registry::Registry;
