// src/config.rs
use crate::application::queries::SortDocsOptions;
use crate::domain::date::DateStyle;
use crate::infrastructure::time::UtcDateFormatter;
use std::env;
use thiserror::Error;

pub const FILTER_DASHBOARD_VAR: &str = "CONTENT_FILTER_DASHBOARD";
pub const SORT_BY_TITLE_VAR: &str = "CONTENT_SORT_BY_TITLE";
pub const DATE_STYLE_VAR: &str = "CONTENT_DATE_STYLE";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentConfig {
    sort_options: SortDocsOptions,
    date_style: DateStyle,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ContentConfig {
    /// Build configuration from environment variables, falling back to the
    /// library defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// # Errors
    ///
    /// Same as [`ContentConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SortDocsOptions::default();

        let filter_dashboard = lookup(FILTER_DASHBOARD_VAR)
            .map(|v| parse_flag(FILTER_DASHBOARD_VAR, &v))
            .transpose()?
            .unwrap_or(defaults.filter_dashboard);

        let sort_by_title = lookup(SORT_BY_TITLE_VAR)
            .map(|v| parse_flag(SORT_BY_TITLE_VAR, &v))
            .transpose()?
            .unwrap_or(defaults.sort_by_title);

        let date_style = lookup(DATE_STYLE_VAR)
            .map(|v| {
                v.parse::<DateStyle>()
                    .map_err(|err| ConfigError::Invalid(format!("{DATE_STYLE_VAR}: {err}")))
            })
            .transpose()?
            .unwrap_or_default();

        let config = Self {
            sort_options: SortDocsOptions {
                filter_dashboard,
                sort_by_title,
            },
            date_style,
        };
        tracing::debug!(?config, "loaded content configuration");
        Ok(config)
    }

    #[must_use]
    pub const fn sort_options(&self) -> SortDocsOptions {
        self.sort_options
    }

    #[must_use]
    pub const fn date_style(&self) -> DateStyle {
        self.date_style
    }

    #[must_use]
    pub const fn date_formatter(&self) -> UtcDateFormatter {
        UtcDateFormatter::new(self.date_style)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got `{other}`"
        ))),
    }
}
