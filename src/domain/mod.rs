// src/domain/mod.rs
pub mod account;
pub mod category;
pub mod errors;
pub mod product;
pub mod slug;
