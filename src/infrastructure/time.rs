// src/infrastructure/time.rs
use crate::application::ports::time::DateFormatter;
use crate::domain::date::{DateInput, DateStyle};
use crate::domain::errors::DomainResult;

/// Rendered in place of a date when the input does not describe one.
pub const INVALID_DATE: &str = "Invalid Date";

/// en-US formatter anchored to UTC, independent of the host timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct UtcDateFormatter {
    style: DateStyle,
}

impl UtcDateFormatter {
    #[must_use]
    pub const fn new(style: DateStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub const fn style(&self) -> DateStyle {
        self.style
    }
}

impl DateFormatter for UtcDateFormatter {
    fn format(&self, input: &DateInput) -> String {
        match self.try_format(input) {
            Ok(rendered) => rendered,
            Err(err) => {
                tracing::warn!(input = %input, error = %err, "rendering invalid date");
                INVALID_DATE.to_string()
            }
        }
    }

    fn try_format(&self, input: &DateInput) -> DomainResult<String> {
        let instant = input.to_utc()?;
        Ok(self.style.render(&instant))
    }
}

/// Render a date-like value as `M/D/YYYY` in UTC, or `"Invalid Date"`.
#[must_use]
pub fn format_date(date: impl Into<DateInput>) -> String {
    UtcDateFormatter::default().format(&date.into())
}

#[must_use]
pub fn format_date_with(date: impl Into<DateInput>, style: DateStyle) -> String {
    UtcDateFormatter::new(style).format(&date.into())
}

/// Strict variant of [`format_date`].
///
/// # Errors
///
/// Returns [`DomainError::InvalidDate`](crate::domain::errors::DomainError::InvalidDate)
/// when the input does not describe a date.
pub fn try_format_date(date: impl Into<DateInput>) -> DomainResult<String> {
    UtcDateFormatter::default().try_format(&date.into())
}
