// src/application/ports/mod.rs
pub mod security;
pub mod session;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type SessionTokenSignerPort = dyn security::SessionTokenSigner;
pub type SessionStorePort = dyn session::SessionStore;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
