use crate::{
    application::error::ApplicationResult,
    domain::document::{Document, DocumentRecord, IsDashboardSpec},
};
use icu_collator::{Collator, CollatorPreferences, options::CollatorOptions};
use serde_json::Value;

/// Switches for [`sort_docs`]. Both are enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDocsOptions {
    /// Keep only records whose type is exactly `"Dashboard"`.
    pub filter_dashboard: bool,
    /// Order kept records by trimmed, lowercased title under root locale
    /// collation. Records without a title sort as the empty string.
    pub sort_by_title: bool,
}

impl Default for SortDocsOptions {
    fn default() -> Self {
        Self {
            filter_dashboard: true,
            sort_by_title: true,
        }
    }
}

impl SortDocsOptions {
    #[must_use]
    pub const fn with_filter_dashboard(mut self, enabled: bool) -> Self {
        self.filter_dashboard = enabled;
        self
    }

    #[must_use]
    pub const fn with_sort_by_title(mut self, enabled: bool) -> Self {
        self.sort_by_title = enabled;
        self
    }
}

/// Filter then order `docs`, returning references into the caller's slice.
///
/// The sort is stable, so records with equal normalized titles keep their
/// input order.
#[must_use]
pub fn sort_docs<T: DocumentRecord>(docs: &[T], options: SortDocsOptions) -> Vec<&T> {
    filter_and_sort(docs.iter(), options)
}

/// Owned variant of [`sort_docs`].
#[must_use]
pub fn into_sorted_docs<T: DocumentRecord>(docs: Vec<T>, options: SortDocsOptions) -> Vec<T> {
    filter_and_sort(docs, options)
}

/// Load raw JSON records and order them.
///
/// # Errors
///
/// Fails with an access error when any record lacks the `data` object or has
/// a non-string `type`/`title`. No partial result is returned.
pub fn sort_json_docs(
    values: Vec<Value>,
    options: SortDocsOptions,
) -> ApplicationResult<Vec<Document>> {
    let docs = Document::from_values(values)?;
    Ok(into_sorted_docs(docs, options))
}

fn filter_and_sort<T, I>(docs: I, options: SortDocsOptions) -> Vec<T>
where
    T: DocumentRecord,
    I: IntoIterator<Item = T>,
{
    let spec = IsDashboardSpec::new();
    let mut total = 0usize;
    let mut kept: Vec<T> = docs
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|doc| !options.filter_dashboard || spec.is_satisfied_by(doc))
        .collect();

    if options.sort_by_title {
        kept = sort_by_title(kept);
    }

    tracing::debug!(
        total,
        kept = kept.len(),
        filter_dashboard = options.filter_dashboard,
        sort_by_title = options.sort_by_title,
        "listed documents"
    );
    kept
}

// Keys are computed once; `sort_by` is stable so equal keys keep input order.
fn sort_by_title<T: DocumentRecord>(docs: Vec<T>) -> Vec<T> {
    let mut keyed: Vec<(String, T)> = docs.into_iter().map(|doc| (title_key(&doc), doc)).collect();

    match Collator::try_new(CollatorPreferences::default(), CollatorOptions::default()) {
        Ok(collator) => keyed.sort_by(|(a, _), (b, _)| collator.compare(a, b)),
        Err(err) => {
            tracing::warn!(error = %err, "root collation unavailable, ordering titles by code point");
            keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
        }
    }

    keyed.into_iter().map(|(_, doc)| doc).collect()
}

fn title_key<T: DocumentRecord>(doc: &T) -> String {
    doc.title()
        .map(|title| title.trim().to_lowercase())
        .unwrap_or_default()
}
