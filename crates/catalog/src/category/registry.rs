use astra_primitives::{CategoryId, Selection};
use rustc_hash::{FxHashMap, FxHashSet};
use slab::Slab;
use tracing::debug;

use super::CategoryService;

/// A user-defined category.
#[derive(Debug, Clone)]
pub struct UserCategory {
	name: String,
	parent: Option<CategoryId>,
	description: String,
	children: Vec<CategoryId>,
	members: FxHashSet<Selection>,
}

impl UserCategory {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn parent(&self) -> Option<CategoryId> {
		self.parent
	}

	/// Free-form description; the loader stores the data domain here.
	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn children(&self) -> &[CategoryId] {
		&self.children
	}

	pub fn members(&self) -> impl Iterator<Item = &Selection> {
		self.members.iter()
	}

	pub fn member_count(&self) -> usize {
		self.members.len()
	}
}

#[derive(Debug)]
struct Slot {
	generation: u32,
	category: UserCategory,
}

/// In-memory [`CategoryService`] with unique category names.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
	slots: Slab<Slot>,
	by_name: FxHashMap<String, CategoryId>,
	next_generation: u32,
}

impl CategoryRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the category for `id`, if it still exists.
	pub fn get(&self, id: CategoryId) -> Option<&UserCategory> {
		self.slots
			.get(id.slot())
			.filter(|slot| slot.generation == id.generation())
			.map(|slot| &slot.category)
	}

	fn get_mut(&mut self, id: CategoryId) -> Option<&mut UserCategory> {
		self.slots
			.get_mut(id.slot())
			.filter(|slot| slot.generation == id.generation())
			.map(|slot| &mut slot.category)
	}

	/// Top-level categories and their ids.
	pub fn roots(&self) -> impl Iterator<Item = (CategoryId, &UserCategory)> {
		self.iter().filter(|(_, cat)| cat.parent.is_none())
	}

	pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &UserCategory)> {
		self.slots.iter().map(|(slot, entry)| {
			(
				CategoryId::new(slot as u32, entry.generation),
				&entry.category,
			)
		})
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}
}

impl CategoryService for CategoryRegistry {
	fn find(&self, name: &str) -> Option<CategoryId> {
		self.by_name.get(name).copied()
	}

	fn new_category(
		&mut self,
		name: &str,
		parent: Option<CategoryId>,
		description: &str,
	) -> Option<CategoryId> {
		if self.by_name.contains_key(name) {
			return None;
		}
		if let Some(parent) = parent
			&& self.get(parent).is_none()
		{
			return None;
		}

		let generation = self.next_generation;
		self.next_generation = self.next_generation.wrapping_add(1);
		let slot = self.slots.insert(Slot {
			generation,
			category: UserCategory {
				name: name.to_string(),
				parent,
				description: description.to_string(),
				children: Vec::new(),
				members: FxHashSet::default(),
			},
		});
		let id = CategoryId::new(slot as u32, generation);
		self.by_name.insert(name.to_string(), id);
		if let Some(parent) = parent
			&& let Some(parent) = self.get_mut(parent)
		{
			parent.children.push(id);
		}
		debug!(name, %id, "category created");
		Some(id)
	}

	fn delete_category(&mut self, category: CategoryId) -> bool {
		let Some(cat) = self.get(category) else {
			return false;
		};
		if !cat.members.is_empty() || !cat.children.is_empty() {
			return false;
		}
		let parent = cat.parent;
		let slot = self.slots.remove(category.slot());
		self.by_name.remove(&slot.category.name);
		if let Some(parent) = parent
			&& let Some(parent) = self.get_mut(parent)
		{
			parent.children.retain(|&child| child != category);
		}
		debug!(name = %slot.category.name, %category, "category deleted");
		true
	}

	fn name(&self, category: CategoryId) -> Option<&str> {
		self.get(category).map(UserCategory::name)
	}

	fn add_object(&mut self, category: CategoryId, selection: Selection) -> bool {
		self.get_mut(category)
			.is_some_and(|cat| cat.members.insert(selection))
	}

	fn remove_object(&mut self, category: CategoryId, selection: Selection) -> bool {
		self.get_mut(category)
			.is_some_and(|cat| cat.members.remove(&selection))
	}

	fn has_object(&self, category: CategoryId, selection: Selection) -> bool {
		self.get(category)
			.is_some_and(|cat| cat.members.contains(&selection))
	}

	fn members(&self, category: CategoryId) -> Vec<Selection> {
		self.get(category)
			.map(|cat| cat.members.iter().copied().collect())
			.unwrap_or_default()
	}
}
