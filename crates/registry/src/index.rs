//! Key index construction.
//!
//! Keys are bound in two stages: every primary key first, then every alias.
//! An alias therefore never displaces a primary key, regardless of where the
//! linker placed the two records. Conflicts within a stage follow the
//! [`DuplicatePolicy`].

use rustc_hash::FxHashMap as HashMap;
use tracing::{debug, warn};

use crate::collision::{Collision, DuplicatePolicy, KeyKind, Resolution};
use crate::error::RegistryError;
use crate::keyed::Keyed;

pub(crate) struct Index<T: 'static> {
	pub records: Vec<&'static T>,
	by_key: HashMap<&'static str, (usize, KeyKind)>,
	pub collisions: Vec<Collision>,
}

impl<T: Keyed> Index<T> {
	pub fn build(
		registry: &'static str,
		records: impl IntoIterator<Item = &'static T>,
		policy: DuplicatePolicy,
	) -> Result<Self, RegistryError> {
		let mut index = Self {
			records: records.into_iter().collect(),
			by_key: HashMap::default(),
			collisions: Vec::new(),
		};

		let records = index.records.clone();

		// Stage A: primary keys
		for (idx, record) in records.iter().copied().enumerate() {
			index.bind(registry, policy, record.key(), KeyKind::Key, idx)?;
		}

		// Stage B: aliases
		for (idx, record) in records.iter().copied().enumerate() {
			for &alias in record.aliases() {
				index.bind(registry, policy, alias, KeyKind::Alias, idx)?;
			}
		}

		debug!(
			registry,
			records = index.records.len(),
			keys = index.by_key.len(),
			collisions = index.collisions.len(),
			"built registry index"
		);
		Ok(index)
	}

	pub fn get(&self, key: &str) -> Option<&'static T> {
		self.by_key.get(key).map(|&(idx, _)| self.records[idx])
	}

	pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.by_key.keys().copied()
	}

	fn bind(
		&mut self,
		registry: &'static str,
		policy: DuplicatePolicy,
		key: &'static str,
		kind: KeyKind,
		idx: usize,
	) -> Result<(), RegistryError> {
		let Some(&(existing, existing_kind)) = self.by_key.get(key) else {
			self.by_key.insert(key, (idx, kind));
			return Ok(());
		};
		if existing == idx {
			return Ok(());
		}

		let resolution = match (existing_kind, kind, policy) {
			(KeyKind::Key, KeyKind::Alias, _) => Resolution::KeptExisting,
			(_, _, DuplicatePolicy::Panic) => {
				return Err(RegistryError::DuplicateKey { registry, key });
			}
			(_, _, DuplicatePolicy::FirstWins) => Resolution::KeptExisting,
			(_, _, DuplicatePolicy::LastWins) => Resolution::ReplacedExisting,
		};
		if resolution == Resolution::ReplacedExisting {
			self.by_key.insert(key, (idx, kind));
		}

		let collision = Collision {
			registry,
			key,
			existing_kind,
			incoming_kind: kind,
			existing,
			incoming: idx,
			resolution,
		};
		warn!(%collision, "registry key collision");
		self.collisions.push(collision);
		Ok(())
	}
}
