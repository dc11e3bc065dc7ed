// File: crates/tally-web/tests/routes.rs
// Purpose: Drive the router in-process: listing, filtering, add/delete redirects and chart responses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tally_core::{Domain, Entry, RenderOptions, PNG_SIGNATURE};
use tally_store::{EntryStore, MemoryStore};
use tally_web::{router, AppState};
use tower::ServiceExt;

fn app(domain: Domain, entries: Vec<Entry>) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_entries(entries));
    let mut render = RenderOptions::default();
    render.width = 320;
    render.height = 240;
    let app = router(AppState::new(store.clone(), domain, render));
    (app, store)
}

fn sample() -> Vec<Entry> {
    vec![
        Entry::new("lunch", 10.0, "food", Some("2024-01-05".into())),
        Entry::new("dinner", 5.0, "food", Some("2024-01-20".into())),
        Entry::new("flat", 900.0, "rent", Some("2024-02-01".into())),
    ]
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let res = app.clone().oneshot(req).await.expect("router is infallible");
    let status = res.status();
    let headers = res.headers().clone();
    let body = res.into_body().collect().await.expect("body").to_bytes().to_vec();
    (status, headers, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn index_lists_and_filters() {
    let (app, _) = app(Domain::FINANCE, sample());

    let (status, _, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("lunch") && html.contains("flat"));

    let (_, _, body) = send(&app, get("/?category=rent")).await;
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("flat"));
    assert!(!html.contains("lunch"));
    // the filter select still offers every label
    assert!(html.contains(r#"<option value="food">"#));

    let (_, _, body) = send(&app, get("/?category=")).await;
    assert!(String::from_utf8(body).unwrap().contains("lunch"));
}

#[tokio::test]
async fn add_inserts_and_redirects() {
    let (app, store) = app(Domain::FINANCE, Vec::new());
    let (status, headers, _) = send(
        &app,
        post_form("/add", "entry_type=coffee&amount=3.5&category=&date=2024-06-02"),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], "/");

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "coffee");
    assert_eq!(all[0].value, 3.5);
    assert_eq!(all[0].label, "default");
    assert_eq!(all[0].date.as_deref(), Some("2024-06-02"));
}

#[tokio::test]
async fn add_with_empty_value_is_silent_noop() {
    let (app, store) = app(Domain::FITNESS, Vec::new());
    let (status, headers, _) = send(&app, post_form("/add", "exercise=squat&repetitions=&muscle=legs&date=")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], "/");
    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn fitness_form_uses_its_own_fields() {
    let (app, store) = app(Domain::FITNESS, Vec::new());
    send(&app, post_form("/add", "exercise=squat&repetitions=12&muscle=legs&date=2024-05-17")).await;
    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].label, "legs");

    let (_, _, body) = send(&app, get("/?muscle=arms")).await;
    assert!(!String::from_utf8(body).unwrap().contains("squat"));
}

#[tokio::test]
async fn delete_removes_and_redirects() {
    let entries = sample();
    let id = entries[0].id;
    let (app, store) = app(Domain::FINANCE, entries);

    let (status, _, _) = send(&app, get(&format!("/delete/{id}"))).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert!(store.list_all().unwrap().iter().all(|e| e.id != id));
    assert_eq!(store.count().unwrap(), 2);

    let (status, _, _) = send(&app, get("/delete/not-a-uuid")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn chart_routes_return_png() {
    for entries in [sample(), Vec::new()] {
        let (app, _) = app(Domain::FINANCE, entries);
        for uri in ["/entries_count_chart", "/entry_histogram", "/entry_date", "/entry_month"] {
            let (status, headers, body) = send(&app, get(uri)).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(headers[header::CONTENT_TYPE], "image/png", "{uri}");
            assert!(body.starts_with(&PNG_SIGNATURE), "{uri}");
        }
    }
}

#[tokio::test]
async fn malformed_date_fails_only_date_charts() {
    let mut entries = sample();
    entries.push(Entry::new("odd", 1.0, "misc", Some("2024-13".into())));
    let (app, _) = app(Domain::FINANCE, entries);

    for uri in ["/entry_date", "/entry_month"] {
        let (status, _, _) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
    }
    for uri in ["/entries_count_chart", "/entry_histogram"] {
        let (status, _, _) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}
