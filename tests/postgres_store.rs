//! Store properties against a real PostgreSQL database.
//! Runs only when `TEST_DATABASE_URL` is set; each run uses its own schema, dropped afterwards.

use sqlx::PgPool;
use tutorial_api::{AppError, PgTutorialStore, TutorialInput, TutorialStore};

struct TestSchema {
    pool: PgPool,
    name: String,
}

impl TestSchema {
    async fn drop_schema(self) {
        sqlx::query(&format!("DROP SCHEMA IF EXISTS \"{}\" CASCADE", self.name))
            .execute(&self.pool)
            .await
            .unwrap_or_else(|err| panic!("drop schema {}: {err}", self.name));
    }
}

async fn store() -> Option<(PgTutorialStore, TestSchema)> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set; skipping");
            return None;
        }
    };
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap_or_else(|err| panic!("connect {url}: {err}"));
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let name = format!("tutorial_test_{nanos}");
    let store = PgTutorialStore::new(pool.clone(), name.clone());
    store
        .ensure_table()
        .await
        .unwrap_or_else(|err| panic!("ensure table: {err}"));
    Some((store, TestSchema { pool, name }))
}

fn input(title: Option<&str>, description: &str, published: bool) -> TutorialInput {
    TutorialInput {
        title: title.map(String::from),
        description: Some(description.to_string()),
        published,
    }
}

#[tokio::test]
async fn crud_properties_hold() {
    let Some((store, schema)) = store().await else { return };

    assert!(store.list_all().await.unwrap().is_empty());
    store.ping().await.unwrap();

    let a = store.create(input(Some("Rust 100%"), "d", false)).await.unwrap();
    let b = store.create(input(Some("rust_basics"), "d", true)).await.unwrap();
    let c = store.create(input(None, "d", true)).await.unwrap();
    assert!(a.id < b.id && b.id < c.id);

    assert_eq!(
        store.get_by_id(a.id).await.unwrap(),
        Some(tutorial_api::Tutorial::from_input(a.id, input(Some("Rust 100%"), "d", false)))
    );

    // empty fragment matches all, NULL titles included
    assert_eq!(store.list_by_title_contains("").await.unwrap(), store.list_all().await.unwrap());
    // case-sensitive, wildcards literal
    let hits = store.list_by_title_contains("Rust").await.unwrap();
    assert_eq!(hits.iter().map(|t| t.id).collect::<Vec<_>>(), vec![a.id]);
    assert!(store.list_by_title_contains("%").await.unwrap().len() == 1);
    assert!(store.list_by_title_contains("_").await.unwrap().len() == 1);

    let published = store.list_by_published(true).await.unwrap();
    let drafts = store.list_by_published(false).await.unwrap();
    assert_eq!(published.len() + drafts.len(), 3);
    assert!(published.iter().all(|t| t.published) && drafts.iter().all(|t| !t.published));

    let updated = store
        .update_by_id(a.id, input(Some("B"), "d2", true))
        .await
        .unwrap();
    assert_eq!(updated.id, a.id);
    assert_eq!(store.get_by_id(a.id).await.unwrap(), Some(updated));
    assert!(matches!(
        store.update_by_id(c.id + 1000, TutorialInput::default()).await,
        Err(AppError::NotFound(_))
    ));

    store.delete_by_id(b.id).await.unwrap();
    assert_eq!(store.get_by_id(b.id).await.unwrap(), None);
    assert!(matches!(store.delete_by_id(b.id).await, Err(AppError::NotFound(_))));

    let too_long = "A".repeat(256);
    assert!(matches!(
        store.create(input(Some(&too_long), "d", false)).await,
        Err(AppError::Db(_))
    ));

    store.delete_all().await.unwrap();
    assert!(store.list_all().await.unwrap().is_empty());
    store.delete_all().await.unwrap();

    let d = store.create(input(Some("after"), "d", false)).await.unwrap();
    assert!(d.id > c.id);

    schema.drop_schema().await;
}
