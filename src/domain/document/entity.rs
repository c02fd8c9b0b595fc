use crate::domain::document::value_objects::DocumentType;
use crate::domain::errors::{DomainError, DomainResult};
use serde_json::{Map, Value};

/// Read-only view of a content record used by filtering and sorting.
pub trait DocumentRecord {
    fn doc_type(&self) -> &str;
    fn title(&self) -> Option<&str>;
}

impl<T: DocumentRecord + ?Sized> DocumentRecord for &T {
    fn doc_type(&self) -> &str {
        (**self).doc_type()
    }

    fn title(&self) -> Option<&str> {
        (**self).title()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub data: DocumentData,
}

/// Front matter of a document. Fields other than `type` and `title` are kept
/// verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentData {
    pub kind: DocumentType,
    pub title: Option<String>,
    pub extra: Map<String, Value>,
}

/// Front matter keys held in typed fields rather than `extra`.
pub const RESERVED_KEYS: [&str; 2] = ["type", "title"];

impl Document {
    #[must_use]
    pub fn new(kind: impl Into<DocumentType>, title: Option<String>) -> Self {
        Self {
            data: DocumentData {
                kind: kind.into(),
                title,
                extra: Map::new(),
            },
        }
    }

    /// Add an extra front matter field.
    ///
    /// # Errors
    ///
    /// `type` and `title` live in typed fields and are rejected with
    /// [`DomainError::Validation`].
    pub fn with_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> DomainResult<Self> {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            return Err(DomainError::Validation(format!(
                "`{key}` is a reserved front matter key"
            )));
        }
        self.data.extra.insert(key, value.into());
        Ok(self)
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.data.extra.get(key)
    }
}

impl DocumentRecord for Document {
    fn doc_type(&self) -> &str {
        self.data.kind.as_str()
    }

    fn title(&self) -> Option<&str> {
        self.data.title.as_deref()
    }
}
