// tests/support/helpers.rs
use content_kit::{Document, DocumentRecord};
use std::sync::Once;

static TRACING: Once = Once::new();

pub fn init_test_tracing() {
    TRACING.call_once(content_kit::telemetry::init_tracing);
}

pub fn titles_of<T: DocumentRecord>(docs: &[T]) -> Vec<String> {
    docs.iter()
        .map(|doc| doc.title().unwrap_or_default().to_string())
        .collect()
}

pub fn ids_of(docs: &[Document]) -> Vec<i64> {
    docs.iter()
        .filter_map(|doc| doc.field("id").and_then(|v| v.as_i64()))
        .collect()
}
