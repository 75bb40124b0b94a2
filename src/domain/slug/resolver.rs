// src/domain/slug/resolver.rs
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::value_objects::Slug;

/// A collection whose live records own unique slugs.
#[async_trait]
pub trait SlugScope: Send + Sync {
    type Id: Copy + Send + Sync;

    /// Collection name used in logs and errors.
    fn collection(&self) -> &'static str;

    /// Base token used when a title normalizes to nothing.
    fn placeholder(&self) -> &'static str;

    /// Whether a live record other than `exclude` already holds `slug`.
    async fn slug_taken(&self, slug: &Slug, exclude: Option<Self::Id>) -> DomainResult<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugPolicy {
    /// Existence checks allowed per resolution.
    pub max_attempts: u32,
    /// Resolve-and-write rounds allowed when the storage index rejects a slug.
    pub write_attempts: u32,
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 1000,
            write_attempts: 5,
        }
    }
}

/// Domain service producing slugs that are unique within a [`SlugScope`].
pub struct UniqueSlugResolver {
    generator: Arc<dyn SlugGenerator>,
    policy: SlugPolicy,
}

impl UniqueSlugResolver {
    pub fn new(generator: Arc<dyn SlugGenerator>, policy: SlugPolicy) -> Self {
        Self { generator, policy }
    }

    pub fn policy(&self) -> SlugPolicy {
        self.policy
    }

    /// Normalize `source` and append `-2`, `-3`, ... until no other live record
    /// in `scope` holds the candidate.
    ///
    /// Read-only. Every check is an await point, so dropping the future stops
    /// the loop between queries. Persistence errors are returned as-is.
    pub async fn resolve<S>(
        &self,
        scope: &S,
        source: &str,
        exclude: Option<S::Id>,
    ) -> DomainResult<Slug>
    where
        S: SlugScope + ?Sized,
    {
        let normalized = self.generator.slugify(source);
        let base = if normalized.is_empty() {
            scope.placeholder().to_string()
        } else {
            normalized
        };

        let mut candidate = base.clone();
        let mut suffix = 2u32;

        for attempt in 1..=self.policy.max_attempts {
            let slug = Slug::new(candidate)?;
            if !scope.slug_taken(&slug, exclude).await? {
                tracing::debug!(
                    collection = scope.collection(),
                    slug = %slug,
                    attempt,
                    "resolved unique slug"
                );
                return Ok(slug);
            }
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }

        Err(DomainError::SlugExhausted {
            collection: scope.collection(),
            base,
            attempts: self.policy.max_attempts,
        })
    }

    /// Resolve a slug and hand it to `write`. When the write is rejected by
    /// the storage-level unique index, resolution runs again so the next
    /// candidate accounts for the record that won the race.
    pub async fn commit<S, T, F, Fut>(
        &self,
        scope: &S,
        source: &str,
        exclude: Option<S::Id>,
        mut write: F,
    ) -> DomainResult<T>
    where
        S: SlugScope + ?Sized,
        F: FnMut(Slug) -> Fut,
        Fut: Future<Output = DomainResult<T>>,
    {
        for round in 1..=self.policy.write_attempts {
            let slug = self.resolve(scope, source, exclude).await?;
            match write(slug.clone()).await {
                Err(DomainError::DuplicateSlug(reason)) => {
                    tracing::warn!(
                        collection = scope.collection(),
                        slug = %slug,
                        round,
                        %reason,
                        "slug taken at write time, resolving again"
                    );
                }
                other => return other,
            }
        }

        Err(DomainError::Conflict(format!(
            "could not store a unique {} slug after {} attempts",
            scope.collection(),
            self.policy.write_attempts
        )))
    }
}
