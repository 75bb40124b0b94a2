// src/domain/slug/mod.rs
pub mod resolver;
pub mod value_objects;

pub use resolver::{SlugPolicy, SlugScope, UniqueSlugResolver};
pub use value_objects::Slug;
