pub mod documents;

pub use documents::{DocumentDataDto, DocumentDto};
