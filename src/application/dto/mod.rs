pub mod auth;
pub mod categories;
pub mod products;

pub use auth::{SessionDto, SignedSession};
pub use categories::{CategoryDto, CategoryPageDto};
pub use products::ProductDto;
