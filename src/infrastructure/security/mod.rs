// src/infrastructure/security/mod.rs
pub mod password;
pub mod redis_session_store;
pub mod session_store;
pub mod signer;

pub use password::Argon2PasswordHasher;
pub use redis_session_store::RedisSessionStore;
pub use session_store::InMemorySessionStore;
pub use signer::HmacSessionSigner;
