// src/application/queries/catalog/service.rs
use std::sync::Arc;

use crate::domain::{
    category::CategoryReadRepository, product::ProductReadRepository, slug::Slug,
};

pub struct CatalogQueryService {
    pub(super) categories: Arc<dyn CategoryReadRepository>,
    pub(super) products: Arc<dyn ProductReadRepository>,
}

impl CatalogQueryService {
    pub fn new(
        categories: Arc<dyn CategoryReadRepository>,
        products: Arc<dyn ProductReadRepository>,
    ) -> Self {
        Self {
            categories,
            products,
        }
    }
}

/// A path segment that is not a well-formed slug cannot name anything.
pub(super) fn parse_slug(raw: &str) -> Option<Slug> {
    Slug::new(raw).ok()
}
