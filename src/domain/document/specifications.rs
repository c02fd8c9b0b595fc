use crate::domain::document::entity::DocumentRecord;
use crate::domain::document::value_objects::DocumentType;

/// Matches records tagged exactly `"Dashboard"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsDashboardSpec;

impl IsDashboardSpec {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn is_satisfied_by<T: DocumentRecord + ?Sized>(&self, record: &T) -> bool {
        record.doc_type() == DocumentType::DASHBOARD
    }
}
