// src/application/commands/categories/mod.rs
mod create;
mod delete;
mod restore;
mod service;
mod update;

pub use create::CreateCategoryCommand;
pub use delete::DeleteCategoryCommand;
pub use restore::RestoreCategoryCommand;
pub use service::CategoryCommandService;
pub use update::UpdateCategoryCommand;
