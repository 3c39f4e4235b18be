use axum::http::{header, StatusCode};
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;
use todolist::api::{self, AppState};
use todolist::db::init_db;
use todolist::domain::DEFAULT_ITEM_NAMES;
use todolist::{ItemRepository, ListRepository};
use tower::util::ServiceExt;

struct TestApp {
    app: axum::Router,
    items: Arc<ItemRepository>,
    lists: Arc<ListRepository>,
    pool: SqlitePool,
    _temp: TempDir,
}

async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    let items = Arc::new(ItemRepository::new(pool.clone()));
    let lists = Arc::new(ListRepository::new(pool.clone()));
    let app = api::create_router(AppState::new(items.clone(), lists.clone()));

    TestApp {
        app,
        items,
        lists,
        pool,
        _temp: temp_dir,
    }
}

async fn item_count(items: &ItemRepository) -> usize {
    items.find_all().await.unwrap().len()
}

async fn lists_named(pool: &SqlitePool, name: &str) -> i64 {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lists WHERE name = ?")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap();
    count.0
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let req = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, location, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_first_visit_creates_list_and_redirects_to_same_path() {
    let test_app = setup_test_app().await;

    let (status, location, _) = get(&test_app.app, "/Work").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/Work"));

    let list = test_app.lists.find_by_name("Work").await.unwrap().unwrap();
    let names: Vec<&str> = list.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, DEFAULT_ITEM_NAMES);
}

#[tokio::test]
async fn test_second_visit_renders_without_creating() {
    let test_app = setup_test_app().await;
    get(&test_app.app, "/Work").await;

    let (status, _, body) = get(&test_app.app, "/Work").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Work</h1>"));
    assert!(body.contains("<p>Welcome to your to-do list</p>"));

    let stored = test_app.lists.find_by_name("Work").await.unwrap().unwrap();
    for item in &stored.items {
        assert!(body.contains(item.id.as_str()));
    }
    assert_eq!(lists_named(&test_app.pool, "Work").await, 1);
}

#[tokio::test]
async fn test_list_items_are_copies_of_defaults() {
    let test_app = setup_test_app().await;
    get(&test_app.app, "/").await;
    get(&test_app.app, "/Work").await;
    get(&test_app.app, "/Home").await;

    let defaults = test_app.items.find_all().await.unwrap();
    let work = test_app.lists.find_by_name("Work").await.unwrap().unwrap();
    let home = test_app.lists.find_by_name("Home").await.unwrap().unwrap();

    for list in [&work, &home] {
        for item in &list.items {
            assert!(defaults.iter().all(|d| d.id != item.id));
        }
    }
    for item in &work.items {
        assert!(home.items.iter().all(|h| h.id != item.id));
    }
}

#[tokio::test]
async fn test_creating_list_leaves_default_collection_alone() {
    let test_app = setup_test_app().await;

    get(&test_app.app, "/Work").await;
    assert_eq!(item_count(&test_app.items).await, 0);
}

#[tokio::test]
async fn test_list_names_are_case_sensitive() {
    let test_app = setup_test_app().await;
    get(&test_app.app, "/Work").await;

    let (status, location, _) = get(&test_app.app, "/work").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/work"));
    assert_eq!(lists_named(&test_app.pool, "Work").await, 1);
    assert_eq!(lists_named(&test_app.pool, "work").await, 1);
}

#[tokio::test]
async fn test_percent_encoded_name_round_trips() {
    let test_app = setup_test_app().await;

    let (status, location, _) = get(&test_app.app, "/Grocery%20Run").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/Grocery%20Run"));
    assert!(test_app
        .lists
        .find_by_name("Grocery Run")
        .await
        .unwrap()
        .is_some());

    let (status, _, body) = get(&test_app.app, "/Grocery%20Run").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Grocery Run</h1>"));
}

#[tokio::test]
async fn test_list_title_is_escaped() {
    let test_app = setup_test_app().await;
    get(&test_app.app, "/%3Ci%3E").await;

    let (status, _, body) = get(&test_app.app, "/%3Ci%3E").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>&lt;i&gt;</h1>"));
}

#[tokio::test]
async fn test_existing_list_renders_stored_items() {
    let test_app = setup_test_app().await;
    let created = test_app
        .lists
        .insert_one("Chores", &[todolist::Item::new("Vacuum")])
        .await
        .unwrap();

    let (status, _, body) = get(&test_app.app, "/Chores").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<p>Vacuum</p>"));
    assert!(body.contains(created.items[0].id.as_str()));
    assert!(!body.contains("Welcome to your to-do list"));
}

#[tokio::test]
async fn test_trailing_slash_names_the_same_list() {
    let test_app = setup_test_app().await;

    let (status, location, _) = get(&test_app.app, "/Work/").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/Work"));
    assert_eq!(lists_named(&test_app.pool, "Work").await, 1);

    let (status, _, body) = get(&test_app.app, "/Work").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Work</h1>"));

    let (status, _, body) = get(&test_app.app, "/Work/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Work</h1>"));
    assert_eq!(lists_named(&test_app.pool, "Work").await, 1);
}
