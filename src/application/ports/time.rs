// src/application/ports/time.rs
use crate::domain::{date::DateInput, errors::DomainResult};

pub trait DateFormatter: Send + Sync {
    /// Render `input`, falling back to a sentinel string when it is not a date.
    fn format(&self, input: &DateInput) -> String;

    /// # Errors
    ///
    /// Fails when `input` does not describe a date.
    fn try_format(&self, input: &DateInput) -> DomainResult<String>;
}
