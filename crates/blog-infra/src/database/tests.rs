use std::sync::Arc;

use blog_core::domain::{Post, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};
use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

use crate::database::entity::post;
use crate::database::sea_orm_repo::SeaOrmPostRepository;

fn model(id: i32, title: &str, minute: u32) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        content: format!("{title} body"),
        created_at: Utc
            .with_ymd_and_hms(2026, 10, 19, 12, minute, 0)
            .unwrap()
            .into(),
    }
}

fn draft(title: &str, content: &str) -> PostDraft {
    PostDraft::new(Some(title.to_owned()), Some(content.to_owned())).unwrap()
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(1, "Test Post", 0)]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(Arc::new(db));

    let result: Option<Post> = repo.find_by_id(1).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.id, 1);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.content, "Test Post body");
}

#[tokio::test]
async fn test_find_missing_post_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = SeaOrmPostRepository::new(Arc::new(db));

    let result: Option<Post> = repo.find_by_id(9999).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_orders_newest_first() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(2, "Second", 5), model(1, "First", 0)]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(Arc::new(db));

    let posts = repo.list_newest_first().await.unwrap();
    let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);

    let Ok(db) = Arc::try_unwrap(repo.db) else {
        panic!("repository should hold the only connection handle");
    };
    assert_eq!(
        db.into_transaction_log(),
        [Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT "posts"."id", "posts"."title", "posts"."content", "posts"."created_at" FROM "posts" ORDER BY "posts"."created_at" DESC, "posts"."id" DESC"#,
            [],
        )]
    );
}

#[tokio::test]
async fn test_create_returns_stored_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(42, "A", 0)]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(Arc::new(db));

    let post = repo.create(draft("A", "A body")).await.unwrap();
    assert_eq!(post.id, 42);
    assert_eq!(post.title, "A");
}

#[tokio::test]
async fn test_update_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = SeaOrmPostRepository::new(Arc::new(db));

    let err = repo.update(9999, draft("A", "B")).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_update_overwrites_title_and_content_only() {
    let original = model(3, "Old", 0);
    let mut updated = original.clone();
    updated.title = "New".to_owned();
    updated.content = "New body".to_owned();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![original.clone()], vec![updated]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(Arc::new(db));

    let post = repo.update(3, draft("New", "New body")).await.unwrap();
    assert_eq!(post.id, original.id);
    assert_eq!(post.title, "New");
    assert_eq!(post.content, "New body");
    assert_eq!(post.created_at, Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap());
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SeaOrmPostRepository::new(Arc::new(db));

    let err = BaseRepository::<Post, i32>::delete(&repo, 9999)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_existing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = SeaOrmPostRepository::new(Arc::new(db));

    BaseRepository::<Post, i32>::delete(&repo, 1).await.unwrap();
}
