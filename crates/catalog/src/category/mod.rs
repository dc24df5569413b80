//! Named categories and the service that owns them.
//!
//! The catalog never owns categories. It talks to a [`CategoryService`], which
//! resolves names and keeps the category half of the membership relation.
//! [`CategoryRegistry`] is the in-memory implementation.

mod registry;

use astra_primitives::{CategoryId, Selection};

pub use registry::{CategoryRegistry, UserCategory};

#[cfg(test)]
mod tests;

/// Category lookup, lifecycle and category-side membership.
///
/// Failures are reported as `None`/`false`; the catalog turns them into
/// [`CatalogError`](crate::CatalogError) values.
pub trait CategoryService {
	/// Resolves a category by name.
	fn find(&self, name: &str) -> Option<CategoryId>;

	/// Creates a category. Returns `None` if it cannot be created.
	fn new_category(
		&mut self,
		name: &str,
		parent: Option<CategoryId>,
		description: &str,
	) -> Option<CategoryId>;

	/// Deletes an empty category with no children.
	fn delete_category(&mut self, category: CategoryId) -> bool;

	/// Returns the category's name, or `None` if it does not exist.
	fn name(&self, category: CategoryId) -> Option<&str>;

	/// Adds `selection` to the category's member set. Returns false if the
	/// category is unknown or already holds the selection.
	fn add_object(&mut self, category: CategoryId, selection: Selection) -> bool;

	/// Removes `selection` from the category's member set. Returns false if
	/// the category is unknown or does not hold the selection.
	fn remove_object(&mut self, category: CategoryId, selection: Selection) -> bool;

	fn has_object(&self, category: CategoryId, selection: Selection) -> bool;

	/// Snapshot of the category's members.
	fn members(&self, category: CategoryId) -> Vec<Selection>;
}
