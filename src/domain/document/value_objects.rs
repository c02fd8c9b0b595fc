use std::fmt;

/// Type tag carried in a document's front matter (`data.type`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DocumentType(String);

impl DocumentType {
    pub const DASHBOARD: &'static str = "Dashboard";

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn dashboard() -> Self {
        Self::new(Self::DASHBOARD)
    }

    /// Exact, case-sensitive match against `"Dashboard"`.
    #[must_use]
    pub fn is_dashboard(&self) -> bool {
        self.0 == Self::DASHBOARD
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DocumentType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<DocumentType> for String {
    fn from(value: DocumentType) -> Self {
        value.0
    }
}
