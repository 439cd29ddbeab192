// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lowercase, URL-safe rendering of `input`. May return an empty string.
    fn slugify(&self, input: &str) -> String;
}
