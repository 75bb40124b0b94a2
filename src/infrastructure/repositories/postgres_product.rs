// src/infrastructure/repositories/postgres_product.rs
use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{
    NewProduct, Price, Product, ProductFilter, ProductId, ProductReadRepository, ProductTitle,
    ProductUpdate, ProductWriteRepository, Stock,
};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const PRODUCT_COLUMNS: &str =
    "p.id, p.category_id, p.title, p.slug, p.description, p.price, p.stock, p.created_at, p.updated_at";

#[derive(Clone)]
pub struct PostgresProductWriteRepository {
    pool: PgPool,
}

impl PostgresProductWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresProductReadRepository {
    pool: PgPool,
}

impl PostgresProductReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    category_id: i64,
    title: String,
    slug: String,
    description: Option<String>,
    price: i64,
    stock: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(row.id)?,
            category_id: CategoryId::new(row.category_id)?,
            title: ProductTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            price: Price::new(row.price)?,
            stock: Stock::new(row.stock)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProductWriteRepository for PostgresProductWriteRepository {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let NewProduct {
            category_id,
            title,
            slug,
            description,
            price,
            stock,
            created_at,
        } = product;

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products AS p
                 (category_id, title, slug, description, price, stock, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(i64::from(category_id))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(description)
        .bind(price.amount())
        .bind(stock.quantity())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let ProductUpdate {
            id,
            category_id,
            title,
            slug,
            description,
            price,
            stock,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE products AS p SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }

        if let Some(price) = price {
            builder.push(", price = ");
            builder.push_bind(price.amount());
        }

        if let Some(stock) = stock {
            builder.push(", stock = ");
            builder.push_bind(stock.quantity());
        }

        builder.push(" WHERE p.id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(PRODUCT_COLUMNS);

        let row = builder
            .build_query_as::<ProductRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;

        Product::try_from(row)
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductReadRepository for PostgresProductReadRepository {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn find_visible_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p
             JOIN categories c ON c.id = p.category_id AND c.deleted_at IS NULL
             WHERE p.slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn list(&self, filter: ProductFilter) -> DomainResult<Vec<Product>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(PRODUCT_COLUMNS);
        builder.push(" FROM products p");
        if filter.live_categories_only {
            builder.push(" JOIN categories c ON c.id = p.category_id AND c.deleted_at IS NULL");
        }
        if let Some(category_id) = filter.category_id {
            builder.push(" WHERE p.category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        builder.push(" ORDER BY p.created_at DESC, p.id DESC LIMIT ");
        builder.push_bind(i64::from(filter.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(filter.offset));

        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn slug_exists(&self, slug: &Slug, exclude: Option<ProductId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM products
                 WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
