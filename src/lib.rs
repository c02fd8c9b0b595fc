//! Content helpers for static documentation sites: URL slugs, en-US dates
//! rendered in UTC, and Dashboard document listings.
//!
//! ```
//! use content_kit::{format_date, slugify, sort_docs, Document, SortDocsOptions};
//!
//! assert_eq!(slugify("Hello World"), "hello-world");
//! assert_eq!(format_date("2024-01-15T00:00:00Z"), "1/15/2024");
//!
//! let docs = vec![
//!     Document::new("Dashboard", Some("Usage".into())),
//!     Document::new("Guide", Some("Install".into())),
//! ];
//! assert_eq!(sort_docs(&docs, SortDocsOptions::default()).len(), 1);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::{
    error::{ApplicationError, ApplicationResult},
    ports::{time::DateFormatter, util::SlugGenerator},
    queries::{SortDocsOptions, into_sorted_docs, sort_docs, sort_json_docs},
};
pub use config::{ConfigError, ContentConfig};
pub use domain::{
    DateInput, DateStyle, Document, DocumentData, DocumentRecord, DocumentType, DomainError,
    DomainResult, IsDashboardSpec, Slug,
};
pub use infrastructure::{
    DefaultSlugGenerator, INVALID_DATE, UtcDateFormatter, format_date, format_date_with, slugify,
    try_format_date,
};
