// src/application/queries/catalog/mod.rs
mod admin;
mod categories;
mod products;
mod service;

pub use admin::AdminListProductsQuery;
pub use categories::GetCategoryPageQuery;
pub use products::ListProductsQuery;
pub use service::CatalogQueryService;
