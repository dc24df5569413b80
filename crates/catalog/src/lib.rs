//! Identity registry and category membership for catalogued objects.
//!
//! This crate provides:
//! - [`Catalog`]: owning arena of [`AstroObject`]s with identity and category
//!   bookkeeping
//! - [`IndexRegistry`]: maps each live [`IndexNumber`] to its object
//! - [`CategoryService`]: seam to the owner of named categories, with
//!   [`CategoryRegistry`] as the in-memory implementation
//! - [`DataRecord`]: read contract the category loader consumes

pub mod category;
mod catalog;
pub mod config;
mod error;
mod index;
pub mod load;
mod object;

pub use astra_primitives::{
	CategoryId, DataDisposition, IndexNumber, ObjectHandle, ObjectKind, Selection,
};
pub use catalog::Catalog;
pub use category::{CategoryRegistry, CategoryService, UserCategory};
pub use config::CatalogConfig;
pub use error::{CatalogError, ConfigError, Result};
pub use index::IndexRegistry;
pub use load::{DataRecord, DataValue};
pub use object::{AstroObject, CategorySet};
