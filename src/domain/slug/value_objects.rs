// src/domain/slug/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// `\w` here is the ASCII word class; anything else, including non-ASCII letters, is dropped.
static NON_WORD_OR_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_ ]+").expect("invalid slug strip pattern"));
static SPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +").expect("invalid slug space pattern"));

/// Derive the base slug for a display text.
///
/// Lowercases, strips everything that is not a word character or a space and
/// turns each run of spaces into a single hyphen. Leading and trailing hyphens
/// are kept as they come out of the transform.
pub fn derive_base_slug(display_text: &str) -> String {
    let lowered = display_text.to_lowercase();
    let stripped = NON_WORD_OR_SPACE.replace_all(&lowered, "");
    SPACE_RUNS.replace_all(&stripped, "-").into_owned()
}

/// A persisted, URL-safe identifier for a category or post.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        if !value.chars().all(is_slug_char) {
            return Err(DomainError::validation(
                "slug may only contain lowercase letters, digits, underscores and hyphens",
            ));
        }
        Ok(Self(value))
    }

    /// `base-<counter>`, the candidate tried after `base` is taken.
    pub fn with_suffix(base: &str, counter: u64) -> DomainResult<Self> {
        Self::new(format!("{base}-{counter}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
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
