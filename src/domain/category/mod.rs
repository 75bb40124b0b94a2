// src/domain/category/mod.rs
pub mod entity;
pub mod repository;
pub mod slug_scope;
pub mod value_objects;

pub use entity::{Category, CategoryUpdate, NewCategory};
pub use repository::{CategoryReadRepository, CategoryWriteRepository};
pub use slug_scope::CategorySlugScope;
pub use value_objects::{CategoryId, CategoryTitle};
