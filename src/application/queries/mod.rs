pub mod documents;

pub use documents::{SortDocsOptions, into_sorted_docs, sort_docs, sort_json_docs};
