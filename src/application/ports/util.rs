// src/application/ports/util.rs

/// Turns human-entered text into a `[a-z0-9-]` token. Must be pure.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
