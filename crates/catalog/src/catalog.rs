//! The catalog context.
//!
//! A [`Catalog`] owns every object, the identity registry and the category
//! service. All identity and membership changes go through it, which is what
//! keeps the three collections consistent:
//!
//! - an index is bound in the registry iff a live object stores it;
//! - an object lists a category iff the category lists the object's
//!   [`Selection`].

use astra_primitives::{CategoryId, IndexNumber, ObjectHandle, ObjectKind, Selection};
use slab::Slab;
use tracing::{debug, trace, warn};

use crate::category::{CategoryRegistry, CategoryService};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::index::IndexRegistry;
use crate::object::AstroObject;


#[derive(Debug)]
struct Entry {
	generation: u32,
	object: AstroObject,
}

/// Owning arena of objects plus their identity and category bookkeeping.
#[derive(Debug)]
pub struct Catalog<S: CategoryService = CategoryRegistry> {
	objects: Slab<Entry>,
	next_generation: u32,
	index: IndexRegistry,
	categories: S,
	config: CatalogConfig,
}

impl Default for Catalog<CategoryRegistry> {
	fn default() -> Self {
		Self::new(CategoryRegistry::new())
	}
}

impl<S: CategoryService> Catalog<S> {
	/// Creates an empty catalog with default configuration.
	pub fn new(categories: S) -> Self {
		Self::with_config(CatalogConfig::default(), categories)
	}

	pub fn with_config(config: CatalogConfig, categories: S) -> Self {
		Self {
			objects: Slab::new(),
			next_generation: 0,
			index: IndexRegistry::new(config.auto_index_base),
			categories,
			config,
		}
	}

	pub fn config(&self) -> &CatalogConfig {
		&self.config
	}

	pub fn index_registry(&self) -> &IndexRegistry {
		&self.index
	}

	pub fn categories(&self) -> &S {
		&self.categories
	}

	/// Creates a category through the service.
	///
	/// Categories are deleted with [`Catalog::delete_category`]. The service
	/// is not handed out mutably; member sets only change with the objects'.
	pub fn new_category(
		&mut self,
		name: &str,
		parent: Option<CategoryId>,
		description: &str,
	) -> Result<CategoryId> {
		self.categories
			.new_category(name, parent, description)
			.ok_or_else(|| CatalogError::CategoryCreateFailed(name.to_string()))
	}

	/// Number of live objects.
	pub fn len(&self) -> usize {
		self.objects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (ObjectHandle, &AstroObject)> {
		self.objects.iter().map(|(slot, entry)| {
			(
				ObjectHandle::new(slot as u32, entry.generation),
				&entry.object,
			)
		})
	}

	// Lifecycle

	/// Creates an object with no identity and no categories.
	pub fn create(&mut self, kind: ObjectKind) -> ObjectHandle {
		let generation = self.next_generation;
		self.next_generation = self.next_generation.wrapping_add(1);
		let slot = self.objects.insert(Entry {
			generation,
			object: AstroObject::new(kind),
		});
		let handle = ObjectHandle::new(slot as u32, generation);
		trace!(%handle, ?kind, "object created");
		handle
	}

	/// Creates a new object of the same kind that joins every category of
	/// `source`. The copy gets no identity.
	///
	/// Categories that refuse the copy are logged and skipped.
	pub fn clone_membership_only(&mut self, source: ObjectHandle) -> Result<ObjectHandle> {
		let (kind, categories) = {
			let obj = self.get(source)?;
			(obj.kind(), obj.category_list())
		};
		let copy = self.create(kind);
		for category in categories {
			if let Err(error) = self.add_to_category(copy, category) {
				warn!(%source, %copy, %category, %error, "category not copied");
			}
		}
		Ok(copy)
	}

	/// Creates a new object that takes over the identity and all category
	/// memberships of `source`.
	///
	/// Afterwards `source` has no identity and no categories, so destroying it
	/// cannot disturb the new object.
	pub fn transfer_identity_and_membership(
		&mut self,
		source: ObjectHandle,
	) -> Result<ObjectHandle> {
		let (kind, index, categories) = {
			let obj = self.get(source)?;
			(obj.kind(), obj.index(), obj.category_list())
		};
		let target = self.create(kind);

		if index.is_valid() {
			self.index.release_bound(index, source);
			self.get_mut(source)?.set_index(IndexNumber::INVALID);
			self.set_index(target, index)?;
		}

		for &category in &categories {
			if let Err(error) = self.add_to_category(target, category) {
				warn!(%source, %target, %category, %error, "category not transferred");
			}
		}
		if let Err(error) = self.clear_categories(source) {
			warn!(%source, %error, "source memberships not fully cleared");
		}
		Ok(target)
	}

	/// Destroys an object, releasing its identity and leaving every category.
	///
	/// The object is gone even when some category refused the removal; the
	/// error reports how many did.
	pub fn destroy(&mut self, handle: ObjectHandle) -> Result<()> {
		let index = self.get(handle)?.index();
		if index.is_valid() {
			self.index.release_bound(index, handle);
		}
		let cleared = self.clear_categories(handle);
		self.objects.remove(handle.slot());
		debug!(%handle, %index, "object destroyed");
		cleared
	}

	// Identity

	pub fn object(&self, handle: ObjectHandle) -> Option<&AstroObject> {
		self.objects
			.get(handle.slot())
			.filter(|entry| entry.generation == handle.generation())
			.map(|entry| &entry.object)
	}

	pub fn contains(&self, handle: ObjectHandle) -> bool {
		self.object(handle).is_some()
	}

	fn get(&self, handle: ObjectHandle) -> Result<&AstroObject> {
		self.object(handle).ok_or(CatalogError::StaleHandle(handle))
	}

	fn get_mut(&mut self, handle: ObjectHandle) -> Result<&mut AstroObject> {
		self.objects
			.get_mut(handle.slot())
			.filter(|entry| entry.generation == handle.generation())
			.map(|entry| &mut entry.object)
			.ok_or(CatalogError::StaleHandle(handle))
	}

	/// Returns the object holding `index`.
	pub fn lookup(&self, index: IndexNumber) -> Option<ObjectHandle> {
		self.index.lookup(index)
	}

	/// Assigns an identity to an object.
	///
	/// Setting the current index again does nothing. Replacing a valid index
	/// logs a warning, releases the old index and binds the new one. Passing
	/// [`IndexNumber::INVALID`] clears the identity.
	pub fn set_index(&mut self, handle: ObjectHandle, index: IndexNumber) -> Result<()> {
		let current = self.get(handle)?.index();
		if current == index {
			return Ok(());
		}
		if let Some(holder) = self.index.lookup(index)
			&& holder != handle
		{
			return Err(CatalogError::IndexInUse { index, holder });
		}

		if current.is_valid() {
			warn!(%handle, %current, new = %index, "set_index on object with already set index");
			self.index.release_bound(current, handle);
		}
		self.get_mut(handle)?.set_index(index);
		if index.is_valid() {
			self.index.assign(index, handle);
		}
		Ok(())
	}

	/// Assigns a fresh automatic identity and returns it.
	pub fn set_new_auto_index(&mut self, handle: ObjectHandle) -> Result<IndexNumber> {
		self.get(handle)?;
		let index = self
			.index
			.next_auto_index()
			.ok_or(CatalogError::AutoIndexExhausted)?;
		self.set_index(handle, index)?;
		Ok(index)
	}

	// Selection

	/// Returns the selection handle for an object, or [`Selection::None`] if
	/// the handle is stale.
	pub fn to_selection(&self, handle: ObjectHandle) -> Selection {
		match self.object(handle) {
			Some(obj) => Selection::Object {
				kind: obj.kind(),
				handle,
			},
			None => Selection::None,
		}
	}

	/// Maps a selection back to a live object.
	pub fn resolve(&self, selection: Selection) -> Option<ObjectHandle> {
		selection.handle().filter(|&handle| self.contains(handle))
	}

	// Category membership

	fn category_label(&self, category: CategoryId) -> String {
		self.categories
			.name(category)
			.map_or_else(|| category.to_string(), str::to_string)
	}

	/// Adds an object to a category, on both sides.
	///
	/// If the category side refuses, the local insertion is undone and
	/// [`CatalogError::CategoryRejected`] is returned.
	pub fn add_to_category(&mut self, handle: ObjectHandle, category: CategoryId) -> Result<()> {
		let selection = self.to_selection(handle);
		if selection.is_empty() {
			return Err(CatalogError::StaleHandle(handle));
		}
		if self.categories.name(category).is_none() {
			return Err(CatalogError::UnknownCategory(category.to_string()));
		}
		if !self.get_mut(handle)?.insert_category(category) {
			return Err(CatalogError::AlreadyMember(self.category_label(category)));
		}
		if !self.categories.add_object(category, selection) {
			self.get_mut(handle)?.remove_category(category);
			let label = self.category_label(category);
			warn!(%handle, category = %label, "category rejected object");
			return Err(CatalogError::CategoryRejected(label));
		}
		Ok(())
	}

	/// Adds an object to the category called `name`.
	///
	/// A missing category is created with `description` when `create` is set.
	pub fn add_to_category_named(
		&mut self,
		handle: ObjectHandle,
		name: &str,
		create: bool,
		description: &str,
	) -> Result<()> {
		let category = match self.categories.find(name) {
			Some(category) => category,
			None if create => self.new_category(name, None, description)?,
			None => return Err(CatalogError::UnknownCategory(name.to_string())),
		};
		self.add_to_category(handle, category)
	}

	/// Removes an object from a category.
	///
	/// The local reference is always dropped first; if the category side then
	/// fails, [`CatalogError::CategoryRejected`] is returned.
	pub fn remove_from_category(
		&mut self,
		handle: ObjectHandle,
		category: CategoryId,
	) -> Result<()> {
		let selection = self.to_selection(handle);
		if !self.get_mut(handle)?.remove_category(category) {
			return Err(CatalogError::NotMember(self.category_label(category)));
		}
		if !self.categories.remove_object(category, selection) {
			let label = self.category_label(category);
			warn!(%handle, category = %label, "category did not list object");
			return Err(CatalogError::CategoryRejected(label));
		}
		Ok(())
	}

	pub fn remove_from_category_named(&mut self, handle: ObjectHandle, name: &str) -> Result<()> {
		let category = self
			.categories
			.find(name)
			.ok_or_else(|| CatalogError::UnknownCategory(name.to_string()))?;
		self.remove_from_category(handle, category)
	}

	/// Removes an object from every category it belongs to.
	///
	/// Always runs to completion; fails with [`CatalogError::Partial`] if any
	/// single removal failed.
	pub fn clear_categories(&mut self, handle: ObjectHandle) -> Result<()> {
		let mut attempted = 0;
		let mut failed = 0;
		loop {
			let Some(category) = self.get(handle)?.first_category() else {
				break;
			};
			attempted += 1;
			if self.remove_from_category(handle, category).is_err() {
				failed += 1;
			}
		}
		if failed > 0 {
			return Err(CatalogError::Partial { failed, attempted });
		}
		Ok(())
	}

	/// Returns false for stale handles.
	pub fn is_in_category(&self, handle: ObjectHandle, category: CategoryId) -> bool {
		self.object(handle)
			.is_some_and(|obj| obj.is_in_category(category))
	}

	/// Returns false if no category is called `name`.
	pub fn is_in_category_named(&self, handle: ObjectHandle, name: &str) -> bool {
		self.categories
			.find(name)
			.is_some_and(|category| self.is_in_category(handle, category))
	}

	/// Categories of an object, in unspecified order.
	pub fn categories_of(&self, handle: ObjectHandle) -> Vec<CategoryId> {
		self.object(handle)
			.map(AstroObject::category_list)
			.unwrap_or_default()
	}

	/// Live objects listed by a category.
	pub fn objects_in_category(&self, category: CategoryId) -> Vec<ObjectHandle> {
		self.categories
			.members(category)
			.into_iter()
			.filter_map(|selection| self.resolve(selection))
			.collect()
	}

	/// Detaches every member and deletes the category from the service.
	pub fn delete_category(&mut self, category: CategoryId) -> Result<()> {
		let Some(name) = self.categories.name(category).map(str::to_string) else {
			return Err(CatalogError::UnknownCategory(category.to_string()));
		};
		for selection in self.categories.members(category) {
			match self.resolve(selection) {
				Some(handle) => {
					if let Err(error) = self.remove_from_category(handle, category) {
						warn!(%handle, category = %name, %error, "member not detached");
					}
				}
				None => {
					self.categories.remove_object(category, selection);
				}
			}
		}
		if !self.categories.delete_category(category) {
			return Err(CatalogError::CategoryNotEmpty(name));
		}
		Ok(())
	}
}
