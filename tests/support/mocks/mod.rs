// tests/support/mocks/mod.rs
pub mod accounts;
pub mod catalog;
pub mod security;
pub mod time;

pub use accounts::InMemoryAccounts;
pub use catalog::{BlindSlugChecks, InMemoryCatalog, RejectingCategoryWrites};
pub use security::PlainPasswordHasher;
pub use time::{DummyClock, fixed_now};
