// src/domain/product/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::product::value_objects::{Price, ProductId, ProductTitle, Stock};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub title: ProductTitle,
    pub slug: Slug,
    pub description: Option<String>,
    pub price: Price,
    pub stock: Stock,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub category_id: CategoryId,
    pub title: ProductTitle,
    pub slug: Slug,
    pub description: Option<String>,
    pub price: Price,
    pub stock: Stock,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub category_id: Option<CategoryId>,
    pub title: Option<ProductTitle>,
    pub slug: Option<Slug>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub price: Option<Price>,
    pub stock: Option<Stock>,
    pub updated_at: DateTime<Utc>,
}

impl ProductUpdate {
    pub fn new(id: ProductId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            category_id: None,
            title: None,
            slug: None,
            description: None,
            price: None,
            stock: None,
            updated_at,
        }
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_title(mut self, title: ProductTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_stock(mut self, stock: Stock) -> Self {
        self.stock = Some(stock);
        self
    }
}

/// Listing filter; `live_categories_only` hides products of soft-deleted categories.
#[derive(Debug, Clone, Copy)]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
    pub live_categories_only: bool,
    pub limit: u32,
    pub offset: u32,
}

impl ProductFilter {
    pub const MAX_LIMIT: u32 = 100;

    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            category_id: None,
            live_categories_only: true,
            limit: limit.clamp(1, Self::MAX_LIMIT),
            offset,
        }
    }

    pub fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn including_deleted_categories(mut self) -> Self {
        self.live_categories_only = false;
        self
    }
}
