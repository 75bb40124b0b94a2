// src/domain/product/mod.rs
pub mod entity;
pub mod repository;
pub mod slug_scope;
pub mod value_objects;

pub use entity::{NewProduct, Product, ProductFilter, ProductUpdate};
pub use repository::{ProductReadRepository, ProductWriteRepository};
pub use slug_scope::ProductSlugScope;
pub use value_objects::{Price, ProductId, ProductTitle, Stock};
