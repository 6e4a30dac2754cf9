/// A record that can be looked up by name.
pub trait Keyed: Sync + 'static {
	/// Primary lookup key.
	fn key(&self) -> &str;

	/// Secondary lookup keys. Never displace another record's primary key.
	fn aliases(&self) -> &[&'static str] {
		&[]
	}
}
