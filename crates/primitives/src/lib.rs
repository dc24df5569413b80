//! Core types for catalogued objects: identities, arena handles, selections.

/// Data-loading dispositions.
pub mod disposition;
/// Identifier and handle types for catalog entities.
pub mod ids;
/// Selection handles consumed by picking and UI layers.
pub mod selection;

pub use disposition::DataDisposition;
pub use ids::{CategoryId, IndexNumber, ObjectHandle};
pub use selection::{ObjectKind, Selection};
