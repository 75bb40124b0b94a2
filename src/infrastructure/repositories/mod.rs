// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_account;
mod postgres_category;
mod postgres_product;

pub use error::map_sqlx;
pub use postgres_account::PostgresAccountRepository;
pub use postgres_category::{PostgresCategoryReadRepository, PostgresCategoryWriteRepository};
pub use postgres_product::{PostgresProductReadRepository, PostgresProductWriteRepository};
