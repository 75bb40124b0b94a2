// src/presentation/http/middleware/mod.rs
pub mod rate_limit;
pub mod require_admin;

pub use rate_limit::login_rate_limit_layer;
pub use require_admin::require_admin;
