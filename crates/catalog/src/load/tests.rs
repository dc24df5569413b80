use astra_primitives::ObjectKind;
use rstest::rstest;
use serde_json::json;

use super::*;
use crate::category::CategoryRegistry;

fn setup() -> (Catalog, ObjectHandle) {
	let mut catalog = Catalog::default();
	let handle = catalog.create(ObjectKind::Star);
	(catalog, handle)
}

fn names(catalog: &Catalog, handle: ObjectHandle) -> Vec<String> {
	let mut names: Vec<String> = catalog
		.categories_of(handle)
		.into_iter()
		.filter_map(|id| catalog.categories().name(id).map(str::to_string))
		.collect();
	names.sort();
	names
}

#[test]
fn single_string_creates_category_under_domain() {
	let (mut catalog, h) = setup();
	let record = json!({ "Category": "Alpha" });
	catalog
		.load_categories(h, &record, DataDisposition::Add, "Sol")
		.unwrap();

	assert_eq!(names(&catalog, h), vec!["Alpha"]);
	let alpha = catalog.categories().find("Alpha").unwrap();
	assert_eq!(catalog.categories().get(alpha).unwrap().description(), "Sol");
}

#[test]
fn array_adds_every_category() {
	let (mut catalog, h) = setup();
	let record = json!({ "Category": ["A", "B", "C"] });
	catalog
		.load_categories(h, &record, DataDisposition::Add, "")
		.unwrap();
	assert_eq!(names(&catalog, h), vec!["A", "B", "C"]);
}

#[test]
fn array_is_best_effort() {
	let (mut catalog, h) = setup();
	let record = json!({ "Category": ["A", 7, "C"] });
	assert_eq!(
		catalog.load_categories(h, &record, DataDisposition::Add, ""),
		Err(CatalogError::Partial {
			failed: 1,
			attempted: 3,
		})
	);
	assert_eq!(names(&catalog, h), vec!["A", "C"]);
}

#[test]
fn empty_array_succeeds() {
	let (mut catalog, h) = setup();
	let record = json!({ "Category": [] });
	catalog
		.load_categories(h, &record, DataDisposition::Add, "")
		.unwrap();
	assert!(catalog.categories_of(h).is_empty());
}

#[rstest]
#[case::missing(json!({ "Name": "Sirius" }), CatalogError::MissingCategoryField("Category".into()))]
#[case::empty_name(json!({ "Category": "" }), CatalogError::EmptyCategoryName)]
#[case::number(json!({ "Category": 3 }), CatalogError::MalformedCategoryField("Category".into()))]
#[case::table(json!({ "Category": { "A": 1 } }), CatalogError::MalformedCategoryField("Category".into()))]
fn rejected_records(#[case] record: serde_json::Value, #[case] expected: CatalogError) {
	let (mut catalog, h) = setup();
	assert_eq!(
		catalog.load_categories(h, &record, DataDisposition::Add, ""),
		Err(expected)
	);
	assert!(catalog.categories_of(h).is_empty());
}

#[rstest]
#[case(DataDisposition::Add, vec!["New", "Old"])]
#[case(DataDisposition::Modify, vec!["New", "Old"])]
#[case(DataDisposition::Replace, vec!["New"])]
fn disposition_controls_clearing(#[case] disposition: DataDisposition, #[case] expected: Vec<&str>) {
	let (mut catalog, h) = setup();
	catalog.add_to_category_named(h, "Old", true, "").unwrap();

	let record = json!({ "Category": "New" });
	catalog
		.load_categories(h, &record, disposition, "")
		.unwrap();
	assert_eq!(names(&catalog, h), expected);
}

#[test]
fn reloading_same_record_reports_existing_membership() {
	let (mut catalog, h) = setup();
	let record = json!({ "Category": "Alpha" });
	catalog
		.load_categories(h, &record, DataDisposition::Add, "")
		.unwrap();
	assert_eq!(
		catalog.load_categories(h, &record, DataDisposition::Add, ""),
		Err(CatalogError::AlreadyMember("Alpha".into()))
	);
	catalog
		.load_categories(h, &record, DataDisposition::Replace, "")
		.unwrap();
	assert_eq!(names(&catalog, h), vec!["Alpha"]);
}

#[test]
fn existing_category_keeps_its_description() {
	let (mut catalog, h) = setup();
	let id = catalog.new_category("Alpha", None, "original").unwrap();
	let record = json!({ "Category": "Alpha" });
	catalog
		.load_categories(h, &record, DataDisposition::Add, "other")
		.unwrap();
	assert_eq!(catalog.categories().get(id).unwrap().description(), "original");
}

#[test]
fn toml_records_are_supported() {
	let (mut catalog, h) = setup();
	let table: toml::Table = toml::from_str(r#"Category = ["Nearby", "Binary"]"#).unwrap();
	catalog
		.load_categories(h, &table, DataDisposition::Add, "")
		.unwrap();
	assert_eq!(names(&catalog, h), vec!["Binary", "Nearby"]);
}

#[test]
fn json_map_records_are_supported() {
	let (mut catalog, h) = setup();
	let mut map = serde_json::Map::new();
	map.insert("Category".into(), json!("Alpha"));
	catalog
		.load_categories(h, &map, DataDisposition::Add, "")
		.unwrap();
	assert_eq!(names(&catalog, h), vec!["Alpha"]);
}

#[test]
fn custom_field_name() {
	let config = crate::CatalogConfig {
		category_field: "Tags".into(),
		..Default::default()
	};
	let mut catalog = Catalog::with_config(config, CategoryRegistry::new());
	let h = catalog.create(ObjectKind::Body);
	let record = json!({ "Tags": "Moons", "Category": "Ignored" });
	catalog
		.load_categories(h, &record, DataDisposition::Add, "")
		.unwrap();
	assert_eq!(names(&catalog, h), vec!["Moons"]);
}

#[test]
fn stale_handle_is_reported() {
	let (mut catalog, h) = setup();
	catalog.destroy(h).unwrap();
	let record = json!({ "Category": "Alpha" });
	assert_eq!(
		catalog.load_categories(h, &record, DataDisposition::Add, ""),
		Err(CatalogError::StaleHandle(h))
	);
	assert!(catalog.categories().find("Alpha").is_none());
}

#[test]
fn get_string_reads_only_strings() {
	let record = json!({ "Category": "Alpha", "Other": 1 });
	assert_eq!(record.get_string("Category"), Some("Alpha"));
	assert_eq!(record.get_string("Other"), None);
	assert_eq!(record.get_string("Missing"), None);
}
