//! Selection handles.
//!
//! A [`Selection`] is the lightweight value the picking subsystem and the
//! category member sets pass around. It never owns the object it names.

use serde::{Deserialize, Serialize};

use crate::ObjectHandle;

/// Broad class of a catalogued object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
	Star,
	/// Planet, moon, asteroid, comet or spacecraft.
	Body,
	/// Galaxy, nebula, open or globular cluster.
	DeepSky,
	/// Surface feature on a body.
	Location,
	#[default]
	Other,
}

/// Opaque reference to a catalogued object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Selection {
	/// Nothing selected.
	#[default]
	None,
	Object { kind: ObjectKind, handle: ObjectHandle },
}

impl Selection {
	/// Returns true if nothing is selected.
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::None)
	}

	/// Returns the handle of the selected object, if any.
	pub fn handle(&self) -> Option<ObjectHandle> {
		match self {
			Self::None => None,
			Self::Object { handle, .. } => Some(*handle),
		}
	}

	/// Returns the kind of the selected object, if any.
	pub fn kind(&self) -> Option<ObjectKind> {
		match self {
			Self::None => None,
			Self::Object { kind, .. } => Some(*kind),
		}
	}
}
