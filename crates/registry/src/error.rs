use linkset_region::RegionError;

/// Registry construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	#[error(transparent)]
	Region(#[from] RegionError),

	/// Two records claim the same key under [`DuplicatePolicy::Panic`](crate::DuplicatePolicy::Panic).
	#[error("registry {registry}: duplicate key {key:?}")]
	DuplicateKey {
		registry: &'static str,
		key: &'static str,
	},
}
