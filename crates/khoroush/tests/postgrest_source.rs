use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use khoroush::catalog::{
    CatalogError, CatalogService, CatalogSource, ConstructionProject, ManagedProperty,
    PostgrestSource, RealEstateListing,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct SeenRequest {
    table: String,
    params: HashMap<String, String>,
    apikey: Option<String>,
    authorization: Option<String>,
}

#[derive(Clone, Default)]
struct FakeStore {
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

async fn table_handler(
    State(store): State<FakeStore>,
    Path(table): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> axum::response::Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    store.seen.lock().expect("seen mutex").push(SeenRequest {
        table: table.clone(),
        params: params.clone(),
        apikey: header("apikey"),
        authorization: header("authorization"),
    });

    match (table.as_str(), params.get("id").map(String::as_str)) {
        ("real_estate_listings", None) => Json(json!([
            listing("older", false, "2024-01-01T00:00:00Z"),
            listing("featured", true, "2023-01-01T00:00:00Z"),
            listing("newer", false, "2024-06-01T00:00:00Z"),
        ]))
        .into_response(),
        ("real_estate_listings", Some("eq.featured")) => {
            Json(json!([listing("featured", true, "2023-01-01T00:00:00Z")])).into_response()
        }
        ("real_estate_listings", Some("eq.not-a-uuid")) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "code": "22P02",
                "message": "invalid input syntax for type uuid: \"not-a-uuid\"",
            })),
        )
            .into_response(),
        ("construction_projects", Some(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "code": "42703",
                "message": "column construction_projects.id does not exist",
            })),
        )
            .into_response(),
        ("managed_properties", None) => (
            [(axum::http::header::CONTENT_TYPE, "text/html")],
            "<html>gateway login</html>",
        )
            .into_response(),
        ("real_estate_listings", Some(_)) => Json(json!([])).into_response(),
        _ => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "message": "maintenance" })),
        )
            .into_response(),
    }
}

fn listing(id: &str, featured: bool, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Listing {id}"),
        "description": "Corner lot with mature trees",
        "price": 725000,
        "location": "Laval, QC",
        "property_type": "House",
        "bedrooms": 3,
        "bathrooms": 2,
        "square_feet": 1900,
        "image_urls": ["https://cdn.example.com/a.jpg", "https://cdn.example.com/b.jpg"],
        "status": "available",
        "featured": featured,
        "created_at": created_at,
    })
}

async fn spawn_store() -> (String, FakeStore) {
    let store = FakeStore::default();
    let app = Router::new()
        .route("/rest/v1/:table", get(table_handler))
        .with_state(store.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake store");
    let addr = listener.local_addr().expect("fake store address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake store runs");
    });
    (format!("http://{addr}/"), store)
}

fn service(base_url: &str) -> CatalogService {
    let source: Arc<dyn CatalogSource> = Arc::new(PostgrestSource::new(
        reqwest::Client::new(),
        base_url,
        "anon-key",
    ));
    CatalogService::new(source)
}

#[tokio::test]
async fn listing_query_sends_order_and_credentials() {
    let (base_url, store) = spawn_store().await;
    let records: Vec<RealEstateListing> = service(&base_url)
        .listings()
        .await
        .expect("listings load");

    let ids: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["featured", "newer", "older"]);

    let seen = store.seen.lock().expect("seen mutex").clone();
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.table, "real_estate_listings");
    assert_eq!(request.params.get("select").map(String::as_str), Some("*"));
    assert_eq!(
        request.params.get("order").map(String::as_str),
        Some("featured.desc,created_at.desc")
    );
    assert_eq!(request.apikey.as_deref(), Some("anon-key"));
    assert_eq!(request.authorization.as_deref(), Some("Bearer anon-key"));
}

#[tokio::test]
async fn detail_query_filters_by_id_and_limits_to_one() {
    let (base_url, store) = spawn_store().await;
    let record: Option<RealEstateListing> = service(&base_url)
        .detail("featured")
        .await
        .expect("detail loads");
    assert_eq!(record.map(|record| record.id), Some("featured".to_string()));

    let seen = store.seen.lock().expect("seen mutex").clone();
    assert_eq!(seen[0].params.get("id").map(String::as_str), Some("eq.featured"));
    assert_eq!(seen[0].params.get("limit").map(String::as_str), Some("1"));
}

#[tokio::test]
async fn missing_and_malformed_ids_are_not_found() {
    let (base_url, _) = spawn_store().await;
    let catalog = service(&base_url);

    let missing: Option<RealEstateListing> = catalog.detail("nope").await.expect("no error");
    assert!(missing.is_none());

    let malformed: Option<RealEstateListing> =
        catalog.detail("not-a-uuid").await.expect("no error");
    assert!(malformed.is_none());
}

#[tokio::test]
async fn other_bad_requests_on_detail_are_errors() {
    let (base_url, _) = spawn_store().await;
    let result = service(&base_url)
        .detail::<ConstructionProject>("9b2d")
        .await;
    match result {
        Err(CatalogError::Status { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("42703"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_payload_error() {
    let (base_url, _) = spawn_store().await;
    let result = service(&base_url).listings::<ManagedProperty>().await;
    match result {
        Err(CatalogError::Payload { table, .. }) => assert_eq!(table, "managed_properties"),
        other => panic!("expected payload error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_surface_as_status_errors() {
    let (base_url, _) = spawn_store().await;
    let result = service(&base_url).listings::<ConstructionProject>().await;
    match result {
        Err(CatalogError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert!(body.contains("maintenance"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_store_is_an_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("reserve port");
    let addr = listener.local_addr().expect("reserved address");
    drop(listener);

    let result = service(&format!("http://{addr}"))
        .listings::<RealEstateListing>()
        .await;
    assert!(matches!(result, Err(CatalogError::Http(_))));
}
