// tests/support/builders.rs
use content_kit::{Document, DocumentType};
use serde_json::Value;

pub struct DocumentBuilder {
    kind: String,
    title: Option<String>,
    fields: Vec<(String, Value)>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            kind: DocumentType::DASHBOARD.into(),
            title: Some("Test Dashboard".into()),
            fields: Vec::new(),
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn untitled(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> Document {
        self.fields
            .into_iter()
            .fold(Document::new(self.kind, self.title), |doc, (key, value)| {
                doc.with_field(key, value).expect("non-reserved field key")
            })
    }
}

pub fn dashboard(title: &str) -> Document {
    DocumentBuilder::new().title(title).build()
}

pub fn guide(title: &str) -> Document {
    DocumentBuilder::new().kind("Guide").title(title).build()
}
