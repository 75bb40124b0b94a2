pub mod auth;
pub mod categories;
pub(crate) mod guard;
pub mod products;
mod slug_change;

pub use slug_change::SlugChange;
