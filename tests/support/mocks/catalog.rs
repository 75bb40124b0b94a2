// tests/support/mocks/catalog.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use storefront_core::domain::{
    category::{
        Category, CategoryId, CategoryReadRepository, CategoryTitle, CategoryUpdate,
        CategoryWriteRepository, NewCategory,
    },
    errors::{DomainError, DomainResult},
    product::{
        NewProduct, Product, ProductFilter, ProductId, ProductReadRepository, ProductUpdate,
        ProductWriteRepository,
    },
    slug::Slug,
};

#[derive(Default)]
struct CatalogState {
    categories: Vec<Category>,
    products: Vec<Product>,
    next_category_id: i64,
    next_product_id: i64,
}

impl CatalogState {
    fn live_category_slug_taken(&self, slug: &Slug, exclude: Option<CategoryId>) -> bool {
        self.categories
            .iter()
            .any(|c| c.is_live() && &c.slug == slug && Some(c.id) != exclude)
    }

    fn product_slug_taken(&self, slug: &Slug, exclude: Option<ProductId>) -> bool {
        self.products
            .iter()
            .any(|p| &p.slug == slug && Some(p.id) != exclude)
    }

    fn category_is_live(&self, id: CategoryId) -> bool {
        self.categories.iter().any(|c| c.id == id && c.is_live())
    }
}

/// Categories and products in memory, with the same uniqueness rules as the
/// SQL indexes: category slugs unique among live rows, product slugs unique
/// across the table.
#[derive(Default)]
pub struct InMemoryCatalog {
    state: Mutex<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Inserts a category row directly, bypassing slug resolution.
    pub fn seed_category(&self, title: &str, slug: &str, deleted: bool) -> Category {
        let mut state = self.state.lock().unwrap();
        state.next_category_id += 1;
        let now = super::fixed_now();
        let category = Category {
            id: CategoryId::new(state.next_category_id).unwrap(),
            title: CategoryTitle::new(title).unwrap(),
            slug: Slug::new(slug).unwrap(),
            description: None,
            created_at: now,
            updated_at: now,
            deleted_at: deleted.then_some(now),
        };
        state.categories.push(category.clone());
        category
    }

    pub fn category_slugs(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state
            .categories
            .iter()
            .map(|c| c.slug.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCatalog {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if state.live_category_slug_taken(&category.slug, None) {
            return Err(DomainError::DuplicateSlug("category slug already exists".into()));
        }
        state.next_category_id += 1;
        let created = Category {
            id: CategoryId::new(state.next_category_id)?,
            title: category.title,
            slug: category.slug,
            description: category.description,
            created_at: category.created_at,
            updated_at: category.created_at,
            deleted_at: None,
        };
        state.categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &update.slug {
            if state.live_category_slug_taken(slug, Some(update.id)) {
                return Err(DomainError::DuplicateSlug("category slug already exists".into()));
            }
        }
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == update.id && c.is_live())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if let Some(title) = update.title {
            category.title = title;
        }
        if let Some(slug) = update.slug {
            category.slug = slug;
        }
        if let Some(description) = update.description {
            category.description = description;
        }
        category.updated_at = update.updated_at;
        Ok(category.clone())
    }

    async fn soft_delete(&self, id: CategoryId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id && c.is_live())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        category.deleted_at = Some(at);
        category.updated_at = at;
        Ok(())
    }

    async fn restore(&self, id: CategoryId, slug: Slug, at: DateTime<Utc>) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if state.live_category_slug_taken(&slug, Some(id)) {
            return Err(DomainError::DuplicateSlug("category slug already exists".into()));
        }
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id && !c.is_live())
            .ok_or_else(|| DomainError::NotFound("deleted category not found".into()))?;
        category.deleted_at = None;
        category.slug = slug;
        category.updated_at = at;
        Ok(category.clone())
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_live_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .find(|c| c.is_live() && &c.slug == slug)
            .cloned())
    }

    async fn list(&self, include_deleted: bool) -> DomainResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        let mut categories: Vec<Category> = state
            .categories
            .iter()
            .filter(|c| include_deleted || c.is_live())
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()).then(a.id.0.cmp(&b.id.0)));
        Ok(categories)
    }

    async fn live_slug_exists(
        &self,
        slug: &Slug,
        exclude: Option<CategoryId>,
    ) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.live_category_slug_taken(slug, exclude))
    }
}

#[async_trait]
impl ProductWriteRepository for InMemoryCatalog {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let mut state = self.state.lock().unwrap();
        if state.product_slug_taken(&product.slug, None) {
            return Err(DomainError::DuplicateSlug("product slug already exists".into()));
        }
        if !state.categories.iter().any(|c| c.id == product.category_id) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        state.next_product_id += 1;
        let created = Product {
            id: ProductId::new(state.next_product_id)?,
            category_id: product.category_id,
            title: product.title,
            slug: product.slug,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.created_at,
        };
        state.products.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &update.slug {
            if state.product_slug_taken(slug, Some(update.id)) {
                return Err(DomainError::DuplicateSlug("product slug already exists".into()));
            }
        }
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;
        if let Some(category_id) = update.category_id {
            product.category_id = category_id;
        }
        if let Some(title) = update.title {
            product.title = title;
        }
        if let Some(slug) = update.slug {
            product.slug = slug;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(stock) = update.stock {
            product.stock = stock;
        }
        product.updated_at = update.updated_at;
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductReadRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let state = self.state.lock().unwrap();
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_visible_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .products
            .iter()
            .find(|p| &p.slug == slug && state.category_is_live(p.category_id))
            .cloned())
    }

    async fn list(&self, filter: ProductFilter) -> DomainResult<Vec<Product>> {
        let state = self.state.lock().unwrap();
        let mut products: Vec<Product> = state
            .products
            .iter()
            .filter(|p| !filter.live_categories_only || state.category_is_live(p.category_id))
            .filter(|p| filter.category_id.is_none_or(|id| p.category_id == id))
            .cloned()
            .collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(products
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn slug_exists(&self, slug: &Slug, exclude: Option<ProductId>) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.product_slug_taken(slug, exclude))
    }
}

/// Read repository whose first `blind` slug checks report "free", like a
/// reader racing a concurrent insert.
pub struct BlindSlugChecks {
    inner: Arc<InMemoryCatalog>,
    blind: AtomicUsize,
}

impl BlindSlugChecks {
    pub fn new(inner: Arc<InMemoryCatalog>, blind: usize) -> Self {
        Self {
            inner,
            blind: AtomicUsize::new(blind),
        }
    }
}

#[async_trait]
impl CategoryReadRepository for BlindSlugChecks {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        CategoryReadRepository::find_by_id(self.inner.as_ref(), id).await
    }

    async fn find_live_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        self.inner.find_live_by_slug(slug).await
    }

    async fn list(&self, include_deleted: bool) -> DomainResult<Vec<Category>> {
        CategoryReadRepository::list(self.inner.as_ref(), include_deleted).await
    }

    async fn live_slug_exists(
        &self,
        slug: &Slug,
        exclude: Option<CategoryId>,
    ) -> DomainResult<bool> {
        let stale = self
            .blind
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if stale {
            return Ok(false);
        }
        self.inner.live_slug_exists(slug, exclude).await
    }
}

/// Write repository that rejects every insert as a duplicate slug.
pub struct RejectingCategoryWrites {
    pub attempts: AtomicUsize,
}

impl RejectingCategoryWrites {
    pub fn new() -> Self {
        Self {
            attempts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CategoryWriteRepository for RejectingCategoryWrites {
    async fn insert(&self, _category: NewCategory) -> DomainResult<Category> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::DuplicateSlug("category slug already exists".into()))
    }

    async fn update(&self, _update: CategoryUpdate) -> DomainResult<Category> {
        Err(DomainError::NotFound("category not found".into()))
    }

    async fn soft_delete(&self, _id: CategoryId, _at: DateTime<Utc>) -> DomainResult<()> {
        Err(DomainError::NotFound("category not found".into()))
    }

    async fn restore(&self, _id: CategoryId, _slug: Slug, _at: DateTime<Utc>) -> DomainResult<Category> {
        Err(DomainError::NotFound("category not found".into()))
    }
}
