pub mod entity;
pub mod specifications;
pub mod value_objects;

pub use entity::{Document, DocumentData, DocumentRecord};
pub use specifications::IsDashboardSpec;
pub use value_objects::DocumentType;
