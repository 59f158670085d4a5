use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};

async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(routes::build_router(ServerState::new(db), CorsLayer::very_permissive(), Duration::from_secs(30)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder.header("content-type", "application/json").body(Body::from(b.to_string()))?,
        None => builder.body(Body::empty())?,
    };
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

fn doctor(email: &str) -> Value {
    json!({"first_name": "Gregory", "last_name": "House", "special_interest": "diagnostics", "email": email})
}

fn patient() -> Value {
    json!({"first_name": "Ada", "last_name": "Lovelace", "date_of_birth": "1815-12-10"})
}

#[tokio::test]
async fn root_and_health() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello World"}));

    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn empty_tables_list_as_empty_arrays() -> anyhow::Result<()> {
    let app = build_app().await?;
    for uri in ["/doctors/", "/doctors", "/patients/", "/patients"] {
        let (status, body) = send(&app, "GET", uri, None).await?;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn doctor_create_get_round_trip() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, created) = send(&app, "POST", "/doctors/", Some(doctor("house@ppth.org"))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("integer id");
    for field in ["first_name", "last_name", "special_interest", "email"] {
        assert_eq!(created[field], doctor("house@ppth.org")[field]);
    }

    let (status, fetched) = send(&app, "GET", &format!("/doctors/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, list) = send(&app, "GET", "/doctors/", None).await?;
    assert_eq!(list, json!([created]));
    Ok(())
}

#[tokio::test]
async fn doctor_put_overwrites_every_field() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, created) = send(&app, "POST", "/doctors/", Some(doctor("house@ppth.org"))).await?;
    let id = created["id"].as_i64().unwrap();

    let replacement = json!({"first_name": "A", "last_name": "B", "special_interest": "", "email": "a@x.com"});
    let (status, updated) = send(&app, "PUT", &format!("/doctors/{id}"), Some(replacement.clone())).await?;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, "GET", &format!("/doctors/{id}"), None).await?;
    assert_eq!(fetched, updated);
    assert_eq!(fetched, json!({"id": id, "first_name": "A", "last_name": "B", "special_interest": "", "email": "a@x.com"}));

    // omitted optional field is cleared, not kept
    let (status, cleared) = send(&app, "PUT", &format!("/doctors/{id}"),
        Some(json!({"first_name": "A", "last_name": "B", "email": "a@x.com"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["special_interest"], Value::Null);

    // no partial updates
    let (status, body) = send(&app, "PUT", &format!("/doctors/{id}"), Some(json!({"first_name": "Only"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
    let (_, unchanged) = send(&app, "GET", &format!("/doctors/{id}"), None).await?;
    assert_eq!(unchanged, cleared);
    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_conflict() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, first) = send(&app, "POST", "/doctors/", Some(doctor("wilson@ppth.org"))).await?;

    let dup = json!({"first_name": "James", "last_name": "Wilson", "email": "wilson@ppth.org"});
    let (status, body) = send(&app, "POST", "/doctors/", Some(dup)).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");

    let (status, fetched) = send(&app, "GET", &format!("/doctors/{}", first["id"]), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, first);
    Ok(())
}

#[tokio::test]
async fn delete_then_delete_again_is_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, created) = send(&app, "POST", "/doctors/", Some(doctor("cuddy@ppth.org"))).await?;
    let uri = format!("/doctors/{}", created["id"]);

    let (status, body) = send(&app, "DELETE", &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Doctor deleted successfully"}));

    let (status, body) = send(&app, "DELETE", &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not Found", "detail": "Doctor not found"}));

    let (status, _) = send(&app, "GET", &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "PUT", &uri, Some(doctor("cuddy@ppth.org"))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn never_assigned_ids_are_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    for uri in ["/doctors/12345", "/patients/12345"] {
        let (status, body) = send(&app, "GET", uri, None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
    }
    Ok(())
}

#[tokio::test]
async fn patient_lifecycle() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, created) = send(&app, "POST", "/patients/", Some(patient())).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["date_of_birth"], "1815-12-10");
    let uri = format!("/patients/{}", created["id"]);

    let (_, fetched) = send(&app, "GET", &uri, None).await?;
    assert_eq!(fetched, created);

    let replacement = json!({"first_name": "Augusta", "last_name": "King", "date_of_birth": "1990-01-31"});
    let (status, updated) = send(&app, "PUT", &uri, Some(replacement)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": created["id"], "first_name": "Augusta", "last_name": "King", "date_of_birth": "1990-01-31"}));

    let (status, body) = send(&app, "DELETE", &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Patient deleted successfully");
    let (status, body) = send(&app, "DELETE", &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Patient not found");
    Ok(())
}

#[tokio::test]
async fn malformed_input_is_a_validation_error() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cases = [
        ("POST", "/patients/", Some(json!({"first_name": "A", "last_name": "B", "date_of_birth": "not-a-date"}))),
        ("POST", "/patients/", Some(json!({"first_name": "A", "last_name": "B"}))),
        ("POST", "/doctors/", Some(json!({"first_name": "A", "last_name": "B"}))),
        ("POST", "/doctors/", Some(json!({"first_name": "", "last_name": "B", "email": "a@x.com"}))),
        ("POST", "/doctors/", Some(json!({"first_name": 1, "last_name": "B", "email": "a@x.com"}))),
        ("GET", "/doctors/abc", None),
        ("DELETE", "/patients/abc", None),
    ];
    for (method, uri, body) in cases {
        let (status, res) = send(&app, method, uri, body.clone()).await?;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{method} {uri} {body:?}");
        assert_eq!(res["error"], "Validation Error");
    }

    // body without a JSON content type
    let req = Request::builder().method("POST").uri("/doctors/").body(Body::from(doctor("a@x.com").to_string()))?;
    let res = app.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = send(&app, "GET", "/doctors/", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_distinct_ids() -> anyhow::Result<()> {
    let app = build_app().await?;
    let mut set = tokio::task::JoinSet::new();
    for i in 0..16 {
        let app = app.clone();
        set.spawn(async move { send(&app, "POST", "/doctors/", Some(doctor(&format!("doc{i}@ppth.org")))).await });
    }
    let mut ids = Vec::new();
    while let Some(res) = set.join_next().await {
        let (status, body) = res??;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["id"].as_i64().unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16);

    let (_, list) = send(&app, "GET", "/doctors/", None).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(16));
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/doctors/{id}"].is_object());
    assert!(doc["paths"]["/patients/"].is_object());
    Ok(())
}
