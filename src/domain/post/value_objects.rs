// src/domain/post/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const TITLE_MAX_CHARS: usize = 100;
const EXCERPT_MAX_CHARS: usize = 200;
pub const DEFAULT_FEATURED_IMAGE: &str = "default-post.jpg";

macro_rules! positive_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> DomainResult<Self> {
                if id <= 0 {
                    Err(DomainError::validation(concat!($label, " must be positive")))
                } else {
                    Ok(Self(id))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

positive_id!(PostId, "post id");
positive_id!(CommentId, "comment id");
positive_id!(AuthorId, "author id");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("title is required"));
        }
        if value.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "title cannot be more than {TITLE_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("content is required"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostExcerpt(String);

impl PostExcerpt {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > EXCERPT_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "excerpt cannot be more than {EXCERPT_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn parse_optional(value: Option<String>) -> DomainResult<Option<Self>> {
        match value {
            Some(text) if !text.trim().is_empty() => Self::new(text).map(Some),
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedImage(String);

impl FeaturedImage {
    /// Blank or missing input falls back to the stock image.
    pub fn new(value: Option<String>) -> Self {
        match value {
            Some(path) if !path.trim().is_empty() => Self(path.trim().to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for FeaturedImage {
    fn default() -> Self {
        Self(DEFAULT_FEATURED_IMAGE.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = values
            .into_iter()
            .map(|tag| tag.into().trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        Self(tags)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("comment content is required"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed_and_bounded() {
        assert_eq!(PostTitle::new("  Hi  ").unwrap().as_str(), "Hi");
        assert!(PostTitle::new("").is_err());
        assert!(PostTitle::new("t".repeat(100)).is_ok());
        assert!(PostTitle::new("t".repeat(101)).is_err());
    }

    #[test]
    fn content_must_not_be_blank() {
        assert!(PostContent::new(" \n ").is_err());
        assert_eq!(PostContent::new(" body ").unwrap().as_str(), " body ");
    }

    #[test]
    fn featured_image_defaults() {
        assert_eq!(FeaturedImage::new(None).as_str(), DEFAULT_FEATURED_IMAGE);
        assert_eq!(FeaturedImage::new(Some(" ".into())).as_str(), DEFAULT_FEATURED_IMAGE);
        assert_eq!(FeaturedImage::new(Some("cover.png".into())).as_str(), "cover.png");
    }

    #[test]
    fn tags_drop_blanks() {
        let tags = Tags::new(vec![" rust ", "", "  ", "web"]);
        assert_eq!(tags.as_slice(), &["rust".to_string(), "web".to_string()]);
    }

    #[test]
    fn excerpt_length_is_bounded() {
        assert!(PostExcerpt::new("e".repeat(201)).is_err());
        assert!(PostExcerpt::parse_optional(Some(String::new())).unwrap().is_none());
    }

    #[test]
    fn ids_must_be_positive() {
        assert!(PostId::new(-1).is_err());
        assert!(AuthorId::new(0).is_err());
        assert_eq!(i64::from(CommentId::new(9).unwrap()), 9);
    }
}
