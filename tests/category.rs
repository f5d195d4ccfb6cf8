use tokio;
use vitrina::store::backend::MemoryBackend;
use vitrina::store::categories::{CategoryDraft, CategoryOrder, CategoryPatch, CategoryQuery};
use vitrina::store::products::ProductQuery;
use vitrina::{slugify, DbClient, DbConfig, StoreError};

async fn open_store() -> DbClient {
    DbClient::open(MemoryBackend::new(), DbConfig::default())
        .await
        .expect("Failed to open store")
}

#[test]
fn test_slugify_lowercases_and_joins_with_hyphens() {
    assert_eq!(slugify("Men"), "men");
    assert_eq!(slugify("Summer   Collection"), "summer-collection");
    assert_eq!(slugify("  New Arrivals "), "new-arrivals");
}

#[tokio::test]
async fn test_create_category_derives_the_slug() {
    let db = open_store().await;

    let created = db
        .categories()
        .create(CategoryDraft {
            name: "New Arrivals".to_owned(),
            name_ar: "وصل حديثا".to_owned(),
            ..CategoryDraft::default()
        })
        .await
        .expect("Failed to create category");
    assert_eq!(created.slug, "new-arrivals");

    // An explicit slug wins over the derived one
    let explicit = db
        .categories()
        .create(CategoryDraft {
            name: "Sale Items".to_owned(),
            slug: Some("sale".to_owned()),
            ..CategoryDraft::default()
        })
        .await
        .expect("Failed to create category with explicit slug");
    assert_eq!(explicit.slug, "sale");
}

#[tokio::test]
async fn test_create_rejects_a_malformed_slug() {
    let db = open_store().await;

    let err = db
        .categories()
        .create(CategoryDraft {
            name: "Bad Slug".to_owned(),
            slug: Some("Not A Slug!".to_owned()),
            ..CategoryDraft::default()
        })
        .await
        .expect_err("Create should reject a malformed slug");
    assert!(matches!(err, StoreError::Validation(_)));
}

#[tokio::test]
async fn test_find_many_by_slug_and_order() {
    let db = open_store().await;

    let women = db
        .categories()
        .find_many(CategoryQuery::default().slug("women"))
        .await
        .expect("Failed to query by slug");
    assert_eq!(women.len(), 1);
    assert_eq!(women[0].name, "Women");

    let by_name = db
        .categories()
        .find_many(CategoryQuery::default().order_by(CategoryOrder::Name))
        .await
        .expect("Failed to query ordered by name");
    let names: Vec<_> = by_name
        .iter()
        .map(|category| category.name.as_str())
        .collect();
    assert_eq!(names, vec!["Children", "Men", "Women"]);

    let by_count = db
        .categories()
        .find_many(
            CategoryQuery::default()
                .order_by(CategoryOrder::ProductsCount)
                .limit(1),
        )
        .await
        .expect("Failed to query ordered by product count");
    assert_eq!(by_count[0].slug, "men");
}

#[tokio::test]
async fn test_update_and_delete_category() {
    let db = open_store().await;

    let updated = db
        .categories()
        .update(
            "3",
            CategoryPatch {
                name: Some("Kids".to_owned()),
                ..CategoryPatch::default()
            },
        )
        .await
        .expect("Failed to patch category");
    assert_eq!(updated.name, "Kids");
    assert_eq!(updated.slug, "children");

    let removed = db
        .categories()
        .delete("3")
        .await
        .expect("Failed to delete category");
    assert_eq!(removed.name, "Kids");

    let err = db
        .categories()
        .update(
            "3",
            CategoryPatch {
                name: Some("Gone".to_owned()),
                ..CategoryPatch::default()
            },
        )
        .await
        .expect_err("Patching a deleted category should fail");
    assert!(matches!(
        err,
        StoreError::NotFound {
            collection: "categories",
            ..
        }
    ));
}

#[tokio::test]
async fn test_refresh_product_counts_tracks_the_products_collection() {
    let db = open_store().await;

    // Step 1: Remove two men products, counts are now stale
    db.products()
        .delete("1")
        .await
        .expect("Failed to delete product");
    db.products()
        .delete("2")
        .await
        .expect("Failed to delete product");

    // Step 2: Refresh recomputes per-slug counts
    let refreshed = db
        .categories()
        .refresh_product_counts()
        .await
        .expect("Failed to refresh product counts");
    let men = refreshed
        .iter()
        .find(|category| category.slug == "men")
        .expect("Men category missing");
    assert_eq!(men.products_count, 2);
    assert!(men.updated_at.is_some());

    // Step 3: Unaffected categories keep their counts
    let women = refreshed
        .iter()
        .find(|category| category.slug == "women")
        .expect("Women category missing");
    assert_eq!(women.products_count, 2);

    // Step 4: The products collection itself is untouched
    let products = db
        .products()
        .find_many(ProductQuery::default())
        .await
        .expect("Failed to list products");
    assert_eq!(products.len(), 6);
}
