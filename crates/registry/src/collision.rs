//! What happens when two records claim the same lookup key.
//!
//! Primary keys always outrank aliases. Between two keys of the same kind the
//! registry's [`DuplicatePolicy`] decides, and every decision is kept as a
//! [`Collision`].

use std::fmt;

/// How a registry settles two records bound to the same key.
///
/// The `Default` is [`FirstWins`](Self::FirstWins). Registries built with
/// [`Registry::new`](crate::Registry::new) use [`DuplicatePolicy::for_build`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Refuse to build the index with
	/// [`RegistryError::DuplicateKey`](crate::RegistryError::DuplicateKey).
	Panic,
	/// Keep the record that comes first in region order.
	#[default]
	FirstWins,
	/// Keep the record that comes last in region order.
	LastWins,
}

impl DuplicatePolicy {
	/// [`Panic`](Self::Panic) with `debug_assertions`, [`FirstWins`](Self::FirstWins)
	/// without.
	pub const fn for_build() -> Self {
		if cfg!(debug_assertions) {
			DuplicatePolicy::Panic
		} else {
			DuplicatePolicy::FirstWins
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
	/// The record's primary key.
	Key,
	/// One of the record's aliases.
	Alias,
}

impl fmt::Display for KeyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Key => write!(f, "key"),
			Self::Alias => write!(f, "alias"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// Existing binding kept; incoming dropped.
	KeptExisting,
	/// Existing binding replaced by incoming.
	ReplacedExisting,
}

/// One lookup key claimed by more than one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	pub registry: &'static str,
	/// The conflicting lookup key.
	pub key: &'static str,
	pub existing_kind: KeyKind,
	pub incoming_kind: KeyKind,
	/// Position of the previously bound record among the declared records.
	pub existing: usize,
	/// Position of the record that tried to bind the key.
	pub incoming: usize,
	pub resolution: Resolution,
}

impl fmt::Display for Collision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let outcome = match self.resolution {
			Resolution::KeptExisting => "kept",
			Resolution::ReplacedExisting => "replaced",
		};
		write!(
			f,
			"{}: {} {:?} of record #{} collides with {} of record #{} ({outcome} existing)",
			self.registry,
			self.incoming_kind,
			self.key,
			self.incoming,
			self.existing_kind,
			self.existing,
		)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn default_policy_keeps_the_first_record() {
		assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::FirstWins);
	}

	#[test]
	fn build_policy_follows_debug_assertions() {
		let expected = if cfg!(debug_assertions) {
			DuplicatePolicy::Panic
		} else {
			DuplicatePolicy::FirstWins
		};
		assert_eq!(DuplicatePolicy::for_build(), expected);
	}

	#[test]
	fn collision_names_both_parties() {
		let collision = Collision {
			registry: "COMMANDS",
			key: "ls",
			existing_kind: KeyKind::Key,
			incoming_kind: KeyKind::Alias,
			existing: 2,
			incoming: 0,
			resolution: Resolution::KeptExisting,
		};
		assert_eq!(
			collision.to_string(),
			"COMMANDS: alias \"ls\" of record #0 collides with key of record #2 (kept existing)"
		);
	}
}
