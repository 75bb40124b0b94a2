// src/application/commands/slug_change.rs

/// What an update does to the stored slug.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlugChange {
    /// Leave the slug alone, even when the title changes.
    #[default]
    Keep,
    /// Derive a fresh slug from the (possibly new) title.
    Regenerate,
    /// Derive the slug from caller-supplied text.
    Custom(String),
}

impl SlugChange {
    /// Form semantics: an absent field keeps the slug, a cleared field
    /// regenerates it, anything else is used as the slug source.
    pub fn from_field(field: Option<String>) -> Self {
        match field {
            None => Self::Keep,
            Some(text) if text.trim().is_empty() => Self::Regenerate,
            Some(text) => Self::Custom(text),
        }
    }

    /// Source text for resolution, or `None` when the slug is kept.
    pub(super) fn source<'a>(&'a self, title: &'a str) -> Option<&'a str> {
        match self {
            Self::Keep => None,
            Self::Regenerate => Some(title),
            Self::Custom(text) => Some(text.as_str()),
        }
    }
}

/// Slug source on creation: explicit slug text when given, else the title.
pub(super) fn creation_source<'a>(explicit: Option<&'a str>, title: &'a str) -> &'a str {
    match explicit {
        Some(text) if !text.trim().is_empty() => text,
        _ => title,
    }
}
