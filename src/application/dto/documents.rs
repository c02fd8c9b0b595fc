use crate::domain::{
    document::{Document, DocumentData, DocumentType},
    errors::{DomainError, DomainResult},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire shape of a content record as produced by front matter parsers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDto {
    pub data: DocumentDataDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDataDto {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<DocumentDto> for Document {
    fn from(dto: DocumentDto) -> Self {
        Self {
            data: DocumentData {
                kind: dto.data.kind.map(DocumentType::from).unwrap_or_default(),
                title: dto.data.title,
                extra: dto.data.extra,
            },
        }
    }
}

impl From<&Document> for DocumentDto {
    fn from(doc: &Document) -> Self {
        let kind = doc.data.kind.as_str();
        Self {
            data: DocumentDataDto {
                kind: (!kind.is_empty()).then(|| kind.to_string()),
                title: doc.data.title.clone(),
                extra: doc.data.extra.clone(),
            },
        }
    }
}

impl Document {
    /// Build a document from a raw JSON record.
    ///
    /// # Errors
    ///
    /// Fails with [`DomainError::Access`] when `data` is missing or is not an
    /// object, or when `data.type` / `data.title` are present but not strings.
    pub fn from_value(value: Value) -> DomainResult<Self> {
        serde_json::from_value::<DocumentDto>(value)
            .map(Into::into)
            .map_err(|err| DomainError::Access(err.to_string()))
    }

    /// Convert every record.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed record, naming its index.
    pub fn from_values(values: Vec<Value>) -> DomainResult<Vec<Self>> {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Self::from_value(value).map_err(|err| match err {
                    DomainError::Access(msg) => {
                        DomainError::Access(format!("document {index}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect()
    }

    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when the record cannot be encoded.
    pub fn to_value(&self) -> DomainResult<Value> {
        serde_json::to_value(DocumentDto::from(self))
            .map_err(|err| DomainError::Validation(format!("document encoding failed: {err}")))
    }
}
