use astra_primitives::{ObjectHandle, ObjectKind};

use super::*;

fn star(slot: u32) -> Selection {
	Selection::Object {
		kind: ObjectKind::Star,
		handle: ObjectHandle::new(slot, 0),
	}
}

#[test]
fn find_and_create() {
	let mut reg = CategoryRegistry::new();
	assert_eq!(reg.find("Nearby"), None);

	let id = reg.new_category("Nearby", None, "stars").unwrap();
	assert_eq!(reg.find("Nearby"), Some(id));
	assert_eq!(reg.name(id), Some("Nearby"));
	assert_eq!(reg.get(id).unwrap().description(), "stars");
	assert_eq!(reg.len(), 1);
}

#[test]
fn duplicate_names_are_rejected() {
	let mut reg = CategoryRegistry::new();
	reg.new_category("Nearby", None, "").unwrap();
	assert_eq!(reg.new_category("Nearby", None, ""), None);
	assert_eq!(reg.len(), 1);
}

#[test]
fn children_are_tracked() {
	let mut reg = CategoryRegistry::new();
	let parent = reg.new_category("Galaxies", None, "").unwrap();
	let child = reg.new_category("Spirals", Some(parent), "").unwrap();

	assert_eq!(reg.get(parent).unwrap().children(), &[child]);
	assert_eq!(reg.get(child).unwrap().parent(), Some(parent));
	assert_eq!(reg.roots().count(), 1);

	assert!(!reg.delete_category(parent));
	assert!(reg.delete_category(child));
	assert!(reg.get(parent).unwrap().children().is_empty());
	assert!(reg.delete_category(parent));
	assert!(reg.is_empty());
}

#[test]
fn unknown_parent_is_rejected() {
	let mut reg = CategoryRegistry::new();
	let parent = reg.new_category("Gone", None, "").unwrap();
	assert!(reg.delete_category(parent));
	assert_eq!(reg.new_category("Orphan", Some(parent), ""), None);
}

#[test]
fn member_set_semantics() {
	let mut reg = CategoryRegistry::new();
	let id = reg.new_category("Nearby", None, "").unwrap();

	assert!(reg.add_object(id, star(1)));
	assert!(!reg.add_object(id, star(1)));
	assert!(reg.has_object(id, star(1)));
	assert_eq!(reg.members(id), vec![star(1)]);

	assert!(!reg.delete_category(id));
	assert!(reg.remove_object(id, star(1)));
	assert!(!reg.remove_object(id, star(1)));
	assert!(reg.delete_category(id));
}

#[test]
fn stale_ids_do_not_resolve() {
	let mut reg = CategoryRegistry::new();
	let old = reg.new_category("A", None, "").unwrap();
	assert!(reg.delete_category(old));
	let new = reg.new_category("B", None, "").unwrap();

	assert_eq!(old.slot(), new.slot());
	assert_eq!(reg.name(old), None);
	assert!(!reg.add_object(old, star(1)));
	assert!(reg.members(old).is_empty());
}
