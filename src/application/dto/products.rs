use crate::domain::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: i64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            category_id: product.category_id.into(),
            title: product.title.into_inner(),
            slug: product.slug.into_inner(),
            description: product.description,
            price: product.price.amount(),
            stock: product.stock.quantity(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
