//! Catalog configuration.
//!
//! ```toml
//! auto_index_base = 268435456
//! category_field = "Category"
//! ```

use serde::Deserialize;

use crate::error::ConfigError;

/// First automatically assigned index. Everything below is reserved for
/// externally assigned catalogue numbers.
pub const DEFAULT_AUTO_INDEX_BASE: u32 = 0x1000_0000;

/// Record field the category loader reads.
pub const DEFAULT_CATEGORY_FIELD: &str = "Category";

/// Tunables for a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
	pub auto_index_base: u32,
	pub category_field: String,
}

impl Default for CatalogConfig {
	fn default() -> Self {
		Self {
			auto_index_base: DEFAULT_AUTO_INDEX_BASE,
			category_field: DEFAULT_CATEGORY_FIELD.to_string(),
		}
	}
}

impl CatalogConfig {
	/// Parses and validates a TOML config document.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.auto_index_base == u32::MAX {
			return Err(ConfigError::InvalidAutoIndexBase(self.auto_index_base));
		}
		Ok(())
	}
}
