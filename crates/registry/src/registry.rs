use std::fmt;
use std::sync::OnceLock;

use linkset_region::Region;
use tracing::error;

use crate::collision::{Collision, DuplicatePolicy};
use crate::error::RegistryError;
use crate::index::Index;
use crate::keyed::Keyed;

/// Lookup façade over one region.
///
/// Const-constructible so it can sit next to the region it wraps:
///
/// ```ignore
/// pub static REGISTRY: Registry<Command> = Registry::new(&COMMANDS);
/// ```
///
/// Lookups build the index on first use. Missing keys are `None`, not errors;
/// region defects and refused duplicates panic with the [`RegistryError`]
/// message unless checked first with [`Registry::validate`].
pub struct Registry<T: Keyed> {
	region: &'static Region<T>,
	policy: Option<DuplicatePolicy>,
	index: OnceLock<Result<Index<T>, RegistryError>>,
}

impl<T: Keyed> Registry<T> {
	/// Registry using [`DuplicatePolicy::for_build`].
	pub const fn new(region: &'static Region<T>) -> Self {
		Self {
			region,
			policy: None,
			index: OnceLock::new(),
		}
	}

	pub const fn with_policy(region: &'static Region<T>, policy: DuplicatePolicy) -> Self {
		Self {
			region,
			policy: Some(policy),
			index: OnceLock::new(),
		}
	}

	pub const fn region(&self) -> &'static Region<T> {
		self.region
	}

	pub fn name(&self) -> &'static str {
		self.region.name()
	}

	pub fn policy(&self) -> DuplicatePolicy {
		self.policy.unwrap_or_else(DuplicatePolicy::for_build)
	}

	/// Builds the index if needed and reports any construction error.
	pub fn validate(&self) -> Result<(), RegistryError> {
		self.try_index().map(|_| ())
	}

	/// Record bound to `key`, by primary key or alias.
	pub fn find(&self, key: &str) -> Option<&'static T> {
		self.index().get(key)
	}

	/// First declared record matching `pred`, in region order.
	pub fn find_by(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&'static T> {
		self.iter().find(|record| pred(record))
	}

	/// Declared records in region order.
	pub fn iter(&self) -> impl Iterator<Item = &'static T> + '_ {
		self.index().records.iter().copied()
	}

	/// Declared records sorted by primary key.
	pub fn sorted(&self) -> Vec<&'static T> {
		let mut records: Vec<_> = self.iter().collect();
		records.sort_by(|a, b| a.key().cmp(b.key()));
		records
	}

	/// Every bound lookup key, primary keys and aliases, in no particular order.
	pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.index().keys()
	}

	/// Conflicts resolved while building the index.
	pub fn collisions(&self) -> &[Collision] {
		&self.index().collisions
	}

	/// Number of declared records.
	pub fn len(&self) -> usize {
		self.index().records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn try_index(&self) -> Result<&Index<T>, RegistryError> {
		self.index
			.get_or_init(|| {
				let records = self.region.try_as_slice()?;
				let records = records
					.iter()
					.filter(|record| !self.region.is_placeholder(record));
				Index::build(self.region.name(), records, self.policy())
			})
			.as_ref()
			.map_err(Clone::clone)
	}

	fn index(&self) -> &Index<T> {
		match self.try_index() {
			Ok(index) => index,
			Err(err) => {
				error!(registry = self.name(), %err, "registry construction failed");
				panic!("{err}");
			}
		}
	}
}

impl<T: Keyed> fmt::Debug for Registry<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("region", &self.region.name())
			.field("policy", &self.policy())
			.field("built", &self.index.get().is_some())
			.finish()
	}
}
