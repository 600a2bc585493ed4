use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use std::{
    fs,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

#[tokio::test]
async fn plain_catalog_hides_progress_tracking_entirely() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "shelf-plain-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let db = shelf::db::spawn(&database_url).await;

    let mut cfg = shelf::config::Config::default();
    cfg.books.track_progress = false;
    let state = shelf::server::ShelfState::new(db.clone(), &cfg);
    let app = shelf::server::shelf_router(state);

    // 1) Adding without pages_read is valid here.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add_book")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("title=Emma&author=Jane+Austen"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .expect("redirect must carry a Location header"),
        "/"
    );

    // 2) A submitted numeric pages_read is accepted but ignored.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add_book")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("title=Walden&author=Thoreau&pages_read=250"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    // 3) So is a non-numeric one: the field is never read in this
    //    configuration, not even for type coercion.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add_book")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("title=Siddhartha&author=Hermann+Hesse&pages_read=garbage"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    // All three rows sit at zero in storage.
    let books = db.list().await.unwrap();
    assert_eq!(books.len(), 3);
    assert!(books.iter().all(|b| b.pages_read == 0));

    // 4) The listing shows no progress column, no done-today links and no
    //    pages_read input.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let page = String::from_utf8(body.to_vec()).expect("response body was not utf-8");
    assert!(page.contains("<td>Emma</td>"));
    assert!(page.contains("<td>Walden</td>"));
    assert!(page.contains("<td>Siddhartha</td>"));
    assert!(page.contains("href=\"/delete_book/1\""));
    assert!(!page.contains("Pages read"));
    assert!(!page.contains("done_today"));
    assert!(!page.contains("name=\"pages_read\""));
    assert!(!page.contains("250"));

    // 5) The done-today route is simply not mounted.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/done_today/1")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // 6) Delete still works as usual.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/delete_book/1")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let books = db.list().await.unwrap();
    assert_eq!(books.len(), 2);
    assert!(books.iter().all(|b| b.title != "Emma"));

    let _ = fs::remove_file(format!("{}-wal", temp_path.display()));
    let _ = fs::remove_file(format!("{}-shm", temp_path.display()));
    let _ = fs::remove_file(&temp_path);
}
