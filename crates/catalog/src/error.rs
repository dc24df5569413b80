use astra_primitives::{IndexNumber, ObjectHandle};
use thiserror::Error;

/// Errors from identity and category membership operations.
///
/// Every failure leaves the catalog consistent; nothing in this crate aborts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
	/// The handle refers to an object that has been destroyed.
	#[error("stale object handle: {0}")]
	StaleHandle(ObjectHandle),
	/// The identity is held by another live object.
	#[error("index {index} is held by {holder}")]
	IndexInUse {
		index: IndexNumber,
		holder: ObjectHandle,
	},
	/// The automatic identity counter has run out of values.
	#[error("automatic index range exhausted")]
	AutoIndexExhausted,
	/// No category with this name or id exists.
	#[error("unknown category: {0}")]
	UnknownCategory(String),
	/// The category service refused to create the category.
	#[error("could not create category: {0}")]
	CategoryCreateFailed(String),
	/// The object already belongs to the category.
	#[error("object is already a member of {0}")]
	AlreadyMember(String),
	/// The object does not belong to the category.
	#[error("object is not a member of {0}")]
	NotMember(String),
	/// The category side refused to add or remove the object.
	#[error("category {0} rejected the membership change")]
	CategoryRejected(String),
	/// The category still has members or child categories.
	#[error("category {0} is not empty")]
	CategoryNotEmpty(String),
	/// A category name in a record was empty.
	#[error("empty category name")]
	EmptyCategoryName,
	/// The record has no category field.
	#[error("missing field: {0}")]
	MissingCategoryField(String),
	/// The category field is neither a string nor an array.
	#[error("field {0} must be a string or an array of strings")]
	MalformedCategoryField(String),
	/// Some items of a batch failed; the rest were applied.
	#[error("{failed} of {attempted} category operations failed")]
	Partial { failed: usize, attempted: usize },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
	/// TOML syntax or schema error.
	#[error("failed to parse catalog config: {0}")]
	Parse(#[from] toml::de::Error),
	/// The automatic index base collides with the invalid sentinel.
	#[error("auto_index_base {0} leaves no automatic indices")]
	InvalidAutoIndexBase(u32),
}
