//! Per-object state: identity and local category membership.

use astra_primitives::{CategoryId, IndexNumber, ObjectKind};
use rustc_hash::FxHashSet;

/// Categories an object belongs to.
pub type CategorySet = FxHashSet<CategoryId>;

/// A catalogued astronomical object.
///
/// Only the catalog mutates identity and membership, so the registry and the
/// category member sets always agree with what is stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstroObject {
	kind: ObjectKind,
	index: IndexNumber,
	/// `None` while the object belongs to no category.
	categories: Option<Box<CategorySet>>,
}

impl AstroObject {
	pub(crate) fn new(kind: ObjectKind) -> Self {
		Self {
			kind,
			index: IndexNumber::INVALID,
			categories: None,
		}
	}

	pub fn kind(&self) -> ObjectKind {
		self.kind
	}

	/// Returns the identity, or [`IndexNumber::INVALID`] if none is assigned.
	pub fn index(&self) -> IndexNumber {
		self.index
	}

	/// Returns the category set, or `None` if the object has no categories.
	pub fn categories(&self) -> Option<&CategorySet> {
		self.categories.as_deref()
	}

	pub fn is_in_category(&self, category: CategoryId) -> bool {
		self.categories
			.as_ref()
			.is_some_and(|cats| cats.contains(&category))
	}

	pub fn category_count(&self) -> usize {
		self.categories.as_ref().map_or(0, |cats| cats.len())
	}

	pub(crate) fn set_index(&mut self, index: IndexNumber) {
		self.index = index;
	}

	/// Inserts locally, allocating the set on first use. Returns false if
	/// already present.
	pub(crate) fn insert_category(&mut self, category: CategoryId) -> bool {
		self.categories.get_or_insert_default().insert(category)
	}

	/// Removes locally, dropping the set once it becomes empty. Returns false
	/// if not present.
	pub(crate) fn remove_category(&mut self, category: CategoryId) -> bool {
		let Some(cats) = self.categories.as_mut() else {
			return false;
		};
		if !cats.remove(&category) {
			return false;
		}
		if cats.is_empty() {
			self.categories = None;
		}
		true
	}

	/// Any one category this object belongs to.
	pub(crate) fn first_category(&self) -> Option<CategoryId> {
		self.categories
			.as_ref()
			.and_then(|cats| cats.iter().next().copied())
	}

	pub(crate) fn category_list(&self) -> Vec<CategoryId> {
		self.categories
			.as_ref()
			.map(|cats| cats.iter().copied().collect())
			.unwrap_or_default()
	}
}
