use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] for blank values.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Slugify `text` with `generator` and wrap the result.
    ///
    /// # Errors
    ///
    /// Text with no retainable characters is rejected.
    pub fn generate(generator: &dyn SlugGenerator, text: &str) -> DomainResult<Self> {
        Self::new(generator.slugify(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::util::DefaultSlugGenerator;

    #[test]
    fn new_rejects_blank_values() {
        assert!(matches!(Slug::new("  "), Err(DomainError::Validation(_))));
        assert_eq!(Slug::new("ok").unwrap().as_str(), "ok");
    }

    #[test]
    fn generate_uses_the_generator() {
        let slug = Slug::generate(&DefaultSlugGenerator, "Release Notes 2.0").unwrap();
        assert_eq!(slug.as_str(), "release-notes-20");
        assert_eq!(String::from(slug), "release-notes-20");
    }

    #[test]
    fn generate_rejects_text_without_word_characters() {
        let err = Slug::generate(&DefaultSlugGenerator, "!!! ???").unwrap_err();
        assert_eq!(err, DomainError::Validation("slug cannot be empty".into()));
    }
}
