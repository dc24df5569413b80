//! Category assignment from parsed data records.
//!
//! A record names its categories in one field (`Category` by default):
//!
//! ```toml
//! Category = "Nearby"
//! # or
//! Category = ["Nearby", "Binary"]
//! ```

use astra_primitives::{DataDisposition, ObjectHandle};
use tracing::warn;

use crate::category::CategoryService;
use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};

#[cfg(test)]
mod tests;

/// A value inside a record.
pub trait DataValue: Sized {
	fn as_str(&self) -> Option<&str>;
	fn as_array(&self) -> Option<&[Self]>;
}

/// A parsed key/value record.
pub trait DataRecord {
	type Value: DataValue;

	fn get_value(&self, field: &str) -> Option<&Self::Value>;

	fn get_string(&self, field: &str) -> Option<&str> {
		self.get_value(field).and_then(DataValue::as_str)
	}
}

impl DataValue for serde_json::Value {
	fn as_str(&self) -> Option<&str> {
		serde_json::Value::as_str(self)
	}

	fn as_array(&self) -> Option<&[Self]> {
		serde_json::Value::as_array(self).map(Vec::as_slice)
	}
}

impl DataRecord for serde_json::Value {
	type Value = serde_json::Value;

	fn get_value(&self, field: &str) -> Option<&Self::Value> {
		self.get(field)
	}
}

impl DataRecord for serde_json::Map<String, serde_json::Value> {
	type Value = serde_json::Value;

	fn get_value(&self, field: &str) -> Option<&Self::Value> {
		self.get(field)
	}
}

impl DataValue for toml::Value {
	fn as_str(&self) -> Option<&str> {
		toml::Value::as_str(self)
	}

	fn as_array(&self) -> Option<&[Self]> {
		toml::Value::as_array(self).map(Vec::as_slice)
	}
}

impl DataRecord for toml::Value {
	type Value = toml::Value;

	fn get_value(&self, field: &str) -> Option<&Self::Value> {
		self.get(field)
	}
}

impl DataRecord for toml::Table {
	type Value = toml::Value;

	fn get_value(&self, field: &str) -> Option<&Self::Value> {
		self.get(field)
	}
}

impl<S: CategoryService> Catalog<S> {
	/// Applies the category field of `record` to an object.
	///
	/// With [`DataDisposition::Replace`] existing memberships are cleared
	/// first. Missing categories are created with `domain` as description.
	/// For an array every element is attempted; the result is
	/// [`CatalogError::Partial`] if any of them failed.
	pub fn load_categories<R>(
		&mut self,
		handle: ObjectHandle,
		record: &R,
		disposition: DataDisposition,
		domain: &str,
	) -> Result<()>
	where
		R: DataRecord + ?Sized,
	{
		if !self.contains(handle) {
			return Err(CatalogError::StaleHandle(handle));
		}
		if disposition.replaces()
			&& let Err(error) = self.clear_categories(handle)
		{
			warn!(%handle, %error, "previous categories not fully cleared");
		}

		let field = self.config().category_field.clone();
		let Some(value) = record.get_value(&field) else {
			return Err(CatalogError::MissingCategoryField(field));
		};

		if let Some(name) = value.as_str() {
			if name.is_empty() {
				return Err(CatalogError::EmptyCategoryName);
			}
			return self.add_to_category_named(handle, name, true, domain);
		}

		let Some(names) = value.as_array() else {
			return Err(CatalogError::MalformedCategoryField(field));
		};
		let mut failed = 0;
		for element in names {
			let added = match element.as_str() {
				Some("") => Err(CatalogError::EmptyCategoryName),
				Some(name) => self.add_to_category_named(handle, name, true, domain),
				None => Err(CatalogError::MalformedCategoryField(field.clone())),
			};
			if let Err(error) = added {
				warn!(%handle, %error, "category entry not applied");
				failed += 1;
			}
		}
		if failed > 0 {
			return Err(CatalogError::Partial {
				failed,
				attempted: names.len(),
			});
		}
		Ok(())
	}
}
