use serde::{Deserialize, Serialize};

/// How a loaded record combines with data already attached to an object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataDisposition {
	/// Create a new object from the record.
	#[default]
	Add,
	/// Merge the record into an existing object.
	Modify,
	/// Discard the existing data first, then apply the record.
	Replace,
}

impl DataDisposition {
	/// Returns true if existing data is discarded before the record applies.
	#[inline]
	pub fn replaces(self) -> bool {
		self == Self::Replace
	}
}
