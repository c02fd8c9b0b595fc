// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;

#[derive(Default, Clone, Copy, Debug)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Turn arbitrary text into a lowercase, hyphen-delimited slug.
///
/// Whitespace runs and hyphens become a single separator, anything outside
/// `[a-z0-9_-]` is dropped, and separators never lead or trail. Non-ASCII
/// letters are removed rather than transliterated, so `"Café"` becomes
/// `"caf"`. The result may be empty.
#[must_use]
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for ch in lowered.chars() {
        if ch == '-' || is_separator_space(ch) {
            pending_separator = true;
        } else if is_word_char(ch) {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        }
    }

    tracing::trace!(input, slug = %slug, "slugified text");
    slug
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

// ECMAScript whitespace: Unicode White_Space minus NEL, plus the BOM.
fn is_separator_space(ch: char) -> bool {
    ch == '\u{FEFF}' || (ch.is_whitespace() && ch != '\u{0085}')
}
