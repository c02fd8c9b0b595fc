pub mod date;
pub mod document;
pub mod errors;
pub mod slug;

pub use date::{DateInput, DateStyle};
pub use document::{Document, DocumentData, DocumentRecord, DocumentType, IsDashboardSpec};
pub use errors::{DomainError, DomainResult};
pub use slug::Slug;
