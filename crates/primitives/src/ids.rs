use serde::{Deserialize, Serialize};

/// Catalog identity of an astronomical object.
///
/// Identities are unique among live objects of one catalog. Low values are
/// reserved for externally assigned numbers (catalogue designations); the
/// catalog hands out automatic identities above that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexNumber(pub u32);

impl IndexNumber {
	/// Represents "no identity assigned".
	pub const INVALID: IndexNumber = IndexNumber(u32::MAX);

	/// Returns true if this identity is not the [`INVALID`](Self::INVALID) sentinel.
	#[inline]
	pub fn is_valid(self) -> bool {
		self != Self::INVALID
	}

	/// Returns the underlying u32 value.
	#[inline]
	pub fn as_u32(self) -> u32 {
		self.0
	}
}

impl Default for IndexNumber {
	fn default() -> Self {
		Self::INVALID
	}
}

impl std::fmt::Display for IndexNumber {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if *self == Self::INVALID {
			write!(f, "#INVALID")
		} else {
			write!(f, "#{}", self.0)
		}
	}
}

/// Generational key of an object in a catalog arena.
///
/// The slot may be reused once the object is destroyed; the generation makes
/// sure a handle kept past destruction never resolves to the newcomer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
	slot: u32,
	generation: u32,
}

impl ObjectHandle {
	#[inline]
	pub const fn new(slot: u32, generation: u32) -> Self {
		Self { slot, generation }
	}

	#[inline]
	pub fn slot(self) -> usize {
		self.slot as usize
	}

	#[inline]
	pub fn generation(self) -> u32 {
		self.generation
	}
}

impl std::fmt::Display for ObjectHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "object@{}v{}", self.slot, self.generation)
	}
}

/// Generational key of a category owned by a category service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId {
	slot: u32,
	generation: u32,
}

impl CategoryId {
	#[inline]
	pub const fn new(slot: u32, generation: u32) -> Self {
		Self { slot, generation }
	}

	#[inline]
	pub fn slot(self) -> usize {
		self.slot as usize
	}

	#[inline]
	pub fn generation(self) -> u32 {
		self.generation
	}
}

impl std::fmt::Display for CategoryId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "category@{}v{}", self.slot, self.generation)
	}
}
