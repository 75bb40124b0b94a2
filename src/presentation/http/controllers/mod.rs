// src/presentation/http/controllers/mod.rs
pub mod admin_categories;
pub mod admin_products;
pub mod auth;
pub mod catalog;

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn default_limit() -> u32 {
    20
}
