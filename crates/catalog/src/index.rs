//! Identity registry: maps each live [`IndexNumber`] to the object holding it.

use astra_primitives::{IndexNumber, ObjectHandle};
use rustc_hash::FxHashMap;
use tracing::trace;


/// Mapping from identity to object, plus the automatic identity counter.
///
/// The registry performs no uniqueness checks of its own; the catalog only
/// binds an index after verifying it is free.
#[derive(Debug)]
pub struct IndexRegistry {
	by_index: FxHashMap<IndexNumber, ObjectHandle>,
	auto_base: u32,
	next_auto: u32,
}

impl IndexRegistry {
	/// Creates an empty registry whose automatic indices start at `auto_base`.
	pub fn new(auto_base: u32) -> Self {
		Self {
			by_index: FxHashMap::default(),
			auto_base,
			next_auto: auto_base,
		}
	}

	/// Binds `index` to `handle`, returning the previous holder.
	///
	/// An existing binding is overwritten. Binding [`IndexNumber::INVALID`] is
	/// ignored.
	pub fn assign(&mut self, index: IndexNumber, handle: ObjectHandle) -> Option<ObjectHandle> {
		if !index.is_valid() {
			return None;
		}
		trace!(%index, %handle, "index bound");
		self.by_index.insert(index, handle)
	}

	/// Removes the binding for `index`, if any.
	pub fn release(&mut self, index: IndexNumber) -> Option<ObjectHandle> {
		let prev = self.by_index.remove(&index);
		if prev.is_some() {
			trace!(%index, "index released");
		}
		prev
	}

	/// Removes the binding for `index` only if it points at `handle`.
	pub fn release_bound(&mut self, index: IndexNumber, handle: ObjectHandle) -> bool {
		if self.by_index.get(&index) == Some(&handle) {
			self.release(index);
			true
		} else {
			false
		}
	}

	/// Returns the next automatic index and advances the counter.
	///
	/// Values are never handed out twice. Returns `None` once the counter
	/// reaches [`IndexNumber::INVALID`].
	pub fn next_auto_index(&mut self) -> Option<IndexNumber> {
		let candidate = IndexNumber(self.next_auto);
		if !candidate.is_valid() {
			return None;
		}
		self.next_auto += 1;
		Some(candidate)
	}

	/// Returns the object holding `index`.
	pub fn lookup(&self, index: IndexNumber) -> Option<ObjectHandle> {
		self.by_index.get(&index).copied()
	}

	pub fn contains(&self, index: IndexNumber) -> bool {
		self.by_index.contains_key(&index)
	}

	/// Returns true if `index` lies in the range reserved for manual assignment.
	pub fn is_reserved(&self, index: IndexNumber) -> bool {
		index.0 < self.auto_base
	}

	/// Number of bound identities.
	pub fn len(&self) -> usize {
		self.by_index.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_index.is_empty()
	}

	/// Iterates over all bindings in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (IndexNumber, ObjectHandle)> + '_ {
		self.by_index.iter().map(|(&index, &handle)| (index, handle))
	}
}

impl Default for IndexRegistry {
	fn default() -> Self {
		Self::new(crate::config::DEFAULT_AUTO_INDEX_BASE)
	}
}
