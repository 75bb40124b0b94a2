// src/application/commands/auth/mod.rs
mod bootstrap;
mod login;
mod logout;
mod service;

pub use bootstrap::BootstrapAdminCommand;
pub use login::LoginCommand;
pub use service::AuthCommandService;
