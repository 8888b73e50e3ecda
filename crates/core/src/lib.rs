pub mod config;
pub mod error;
pub mod types;

pub use config::StudioConfig;
pub use error::{EditorError, EditorResult};
pub use types::{FieldCatalog, SchemaEntry, SchemaField, SegmentPayload, TraitCategory};
