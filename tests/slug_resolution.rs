// tests/slug_resolution.rs
use std::sync::Arc;
use std::sync::atomic::Ordering;
use storefront_core::application::commands::{
    SlugChange,
    categories::{
        CreateCategoryCommand, DeleteCategoryCommand, RestoreCategoryCommand,
        UpdateCategoryCommand,
    },
    products::{CreateProductCommand, UpdateProductCommand},
};
use storefront_core::application::error::ApplicationError;
use storefront_core::domain::errors::DomainError;
use storefront_core::domain::slug::SlugPolicy;

mod support;

use support::{BlindSlugChecks, RejectingCategoryWrites, TestOverrides};

fn category(title: &str) -> CreateCategoryCommand {
    CreateCategoryCommand {
        title: title.into(),
        slug: None,
        description: None,
    }
}

fn product(category_id: i64, title: &str) -> CreateProductCommand {
    CreateProductCommand {
        category_id,
        title: title.into(),
        slug: None,
        description: None,
        price: 150_000,
        stock: 3,
    }
}

#[tokio::test]
async fn first_category_gets_the_base_slug() {
    let ctx = support::build_context();
    let admin = ctx.admin().await;

    let created = ctx
        .services
        .category_commands
        .create_category(&admin, category("Giày thể thao"))
        .await
        .unwrap();

    assert_eq!(created.slug, "giay-the-thao");
}

#[tokio::test]
async fn collisions_take_the_next_numeric_suffix() {
    let ctx = support::build_context();
    let admin = ctx.admin().await;
    let commands = &ctx.services.category_commands;

    let first = commands.create_category(&admin, category("Giày thể thao")).await.unwrap();
    let second = commands.create_category(&admin, category("Giày thể thao")).await.unwrap();
    let third = commands.create_category(&admin, category("Giày thể thao")).await.unwrap();

    assert_eq!(first.slug, "giay-the-thao");
    assert_eq!(second.slug, "giay-the-thao-2");
    assert_eq!(third.slug, "giay-the-thao-3");
}

#[tokio::test]
async fn soft_deleted_category_does_not_block_its_slug() {
    let ctx = support::build_context();
    let admin = ctx.admin().await;
    ctx.catalog.seed_category("Mũ len", "mu-len", true);

    let created = ctx
        .services
        .category_commands
        .create_category(&admin, category("Mũ len"))
        .await
        .unwrap();

    assert_eq!(created.slug, "mu-len");
}

#[tokio::test]
async fn deleting_a_category_frees_its_slug() {
    let ctx = support::build_context();
    let admin = ctx.admin().await;
    let commands = &ctx.services.category_commands;

    let old = commands.create_category(&admin, category("Mũ len")).await.unwrap();
    commands
        .delete_category(&admin, DeleteCategoryCommand { id: old.id })
        .await
        .unwrap();
    let replacement = commands.create_category(&admin, category("Mũ len")).await.unwrap();

    assert_eq!(replacement.slug, "mu-len");
    assert_ne!(replacement.id, old.id);
}

#[tokio::test]
async fn restore_moves_to_a_free_suffix_when_slug_was_reused() {
    let ctx = support::build_context();
    let admin = ctx.admin().await;
    let commands = &ctx.services.category_commands;

    let old = commands.create_category(&admin, category("Mũ len")).await.unwrap();
    commands
        .delete_category(&admin, DeleteCategoryCommand { id: old.id })
        .await
        .unwrap();
    commands.create_category(&admin, category("Mũ len")).await.unwrap();

    let restored = commands
        .restore_category(&admin, RestoreCategoryCommand { id: old.id })
        .await
        .unwrap();
    assert_eq!(restored.slug, "mu-len-2");
    assert!(restored.deleted_at.is_none());

    let again = commands
        .restore_category(&admin, RestoreCategoryCommand { id: old.id })
        .await
        .unwrap_err();
    assert!(matches!(again, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn product_update_keeps_its_own_slug() {
    let ctx = support::build_context();
    let admin = ctx.admin().await;
    let shirts = ctx.catalog.seed_category("Áo", "ao", false);
    let commands = &ctx.services.product_commands;

    let polo = commands
        .create_product(&admin, product(shirts.id.0, "Áo Polo"))
        .await
        .unwrap();
    assert_eq!(polo.slug, "ao-polo");

    let regenerated = commands
        .update_product(
            &admin,
            UpdateProductCommand {
                id: polo.id,
                slug: SlugChange::Regenerate,
                ..UpdateProductCommand::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(regenerated.slug, "ao-polo");

    let custom = commands
        .update_product(
            &admin,
            UpdateProductCommand {
                id: polo.id,
                slug: SlugChange::Custom("Áo Polo".into()),
                ..UpdateProductCommand::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(custom.slug, "ao-polo");
}

#[tokio::test]
async fn title_change_without_slug_field_keeps_slug() {
    let ctx = support::build_context();
    let admin = ctx.admin().await;
    let commands = &ctx.services.category_commands;

    let created = commands.create_category(&admin, category("Mũ len")).await.unwrap();
    let renamed = commands
        .update_category(
            &admin,
            UpdateCategoryCommand {
                id: created.id,
                title: Some("Mũ len mùa đông".into()),
                description: None,
                slug: SlugChange::from_field(None),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.title, "Mũ len mùa đông");
    assert_eq!(renamed.slug, "mu-len");

    let regenerated = commands
        .update_category(
            &admin,
            UpdateCategoryCommand {
                id: created.id,
                title: None,
                description: None,
                slug: SlugChange::from_field(Some("  ".into())),
            },
        )
        .await
        .unwrap();
    assert_eq!(regenerated.slug, "mu-len-mua-dong");
}

#[tokio::test]
async fn explicit_slug_text_is_normalized_and_deduplicated() {
    let ctx = support::build_context();
    let admin = ctx.admin().await;
    let commands = &ctx.services.category_commands;

    commands.create_category(&admin, category("Sale")).await.unwrap();
    let created = commands
        .create_category(
            &admin,
            CreateCategoryCommand {
                title: "Summer Sale".into(),
                slug: Some("  SALE!! ".into()),
                description: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(created.slug, "sale-2");
}

#[tokio::test]
async fn symbol_only_title_falls_back_to_placeholder() {
    let ctx = support::build_context();
    let admin = ctx.admin().await;
    let commands = &ctx.services.category_commands;

    let first = commands.create_category(&admin, category("!!!")).await.unwrap();
    let second = commands.create_category(&admin, category("??? ...")).await.unwrap();

    assert_eq!(first.slug, "category");
    assert_eq!(second.slug, "category-2");
}

#[tokio::test]
async fn product_slugs_are_independent_of_category_slugs() {
    let ctx = support::build_context();
    let admin = ctx.admin().await;
    let shoes = ctx.catalog.seed_category("Giày thể thao", "giay-the-thao", false);

    let created = ctx
        .services
        .product_commands
        .create_product(&admin, product(shoes.id.0, "Giày thể thao"))
        .await
        .unwrap();

    assert_eq!(created.slug, "giay-the-thao");
}

#[tokio::test]
async fn products_cannot_be_filed_under_deleted_categories() {
    let ctx = support::build_context();
    let admin = ctx.admin().await;
    let gone = ctx.catalog.seed_category("Cũ", "cu", true);

    let err = ctx
        .services
        .product_commands
        .create_product(&admin, product(gone.id.0, "Áo Polo"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn concurrent_creates_never_share_a_slug() {
    let ctx = support::build_context();
    let admin = ctx.admin().await;
    let commands = &ctx.services.category_commands;

    let (a, b) = tokio::join!(
        commands.create_category(&admin, category("Giày thể thao")),
        commands.create_category(&admin, category("Giày thể thao")),
    );

    let mut slugs = vec![a.unwrap().slug, b.unwrap().slug];
    slugs.sort();
    assert_eq!(slugs, ["giay-the-thao", "giay-the-thao-2"]);
}

#[tokio::test]
async fn write_time_duplicate_triggers_another_resolution() {
    let catalog_ctx = support::build_context();
    let admin = catalog_ctx.admin().await;
    catalog_ctx.catalog.seed_category("Giày thể thao", "giay-the-thao", false);

    // The first existence check misses the row above, as a racing reader would.
    let ctx = support::build_context_with(TestOverrides {
        category_write: Some(catalog_ctx.catalog.clone()),
        category_read: Some(Arc::new(BlindSlugChecks::new(catalog_ctx.catalog.clone(), 1))),
        ..TestOverrides::default()
    });

    let created = ctx
        .services
        .category_commands
        .create_category(&admin, category("Giày thể thao"))
        .await
        .unwrap();

    assert_eq!(created.slug, "giay-the-thao-2");
    assert_eq!(
        catalog_ctx.catalog.category_slugs(),
        ["giay-the-thao", "giay-the-thao-2"]
    );
}

#[tokio::test]
async fn persistent_write_conflicts_surface_as_conflict() {
    let writes = Arc::new(RejectingCategoryWrites::new());
    let ctx = support::build_context_with(TestOverrides {
        policy: SlugPolicy {
            max_attempts: 10,
            write_attempts: 3,
        },
        category_write: Some(writes.clone()),
        ..TestOverrides::default()
    });
    let admin = ctx.admin().await;

    let err = ctx
        .services
        .category_commands
        .create_category(&admin, category("Giày thể thao"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::Conflict(_))));
    assert_eq!(writes.attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn exhausted_suffixes_are_reported() {
    let ctx = support::build_context_with(TestOverrides {
        policy: SlugPolicy {
            max_attempts: 2,
            write_attempts: 5,
        },
        ..TestOverrides::default()
    });
    let admin = ctx.admin().await;
    ctx.catalog.seed_category("Mũ len", "mu-len", false);
    ctx.catalog.seed_category("Mũ len", "mu-len-2", false);

    let err = ctx
        .services
        .category_commands
        .create_category(&admin, category("Mũ len"))
        .await
        .unwrap_err();

    assert!(err.is_slug_conflict());
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::SlugExhausted { attempts: 2, .. })
    ));
}

#[tokio::test]
async fn customers_cannot_run_catalog_commands() {
    let ctx = support::build_context();
    let customer = ctx.customer().await;

    let err = ctx
        .services
        .category_commands
        .create_category(&customer, category("Mũ len"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert!(ctx.catalog.category_slugs().is_empty());
}
