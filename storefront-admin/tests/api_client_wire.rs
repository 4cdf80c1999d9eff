//! Exercises the HTTP adapters against a local axum backend.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum::routing::{get, put};
use serde_json::{Value, json};
use storefront_admin::app::Runtime;
use storefront_admin::domains::profile::state::LogoFile;
use storefront_admin::infra::api_client::ApiClient;
use storefront_admin::infra::services::Services;
use storefront_admin::state::State as AppState;
use storefront_contracts::SocialLinkRequest;
use storefront_contracts::routes::v1;
use storefront_model::profile::ProfileFields;
use storefront_model::{NetworkType, ProfileId, SocialLinkId};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
struct Recorded {
    method: &'static str,
    path: String,
    content_type: Option<String>,
    authorization: Option<String>,
    body: String,
}

type Recorder = Arc<Mutex<Vec<Recorded>>>;

fn header_value(
    headers: &HeaderMap,
    name: header::HeaderName,
) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn record(
    recorder: &Recorder,
    method: &'static str,
    path: String,
    headers: &HeaderMap,
    body: &Bytes,
) {
    recorder.lock().await.push(Recorded {
        method,
        path,
        content_type: header_value(headers, header::CONTENT_TYPE),
        authorization: header_value(headers, header::AUTHORIZATION),
        body: String::from_utf8_lossy(body).into_owned(),
    });
}

fn profile_json() -> Value {
    json!({
        "id": 7,
        "name": "Ferretería Acme",
        "slogan": "Todo para tu obra",
        "street_and_number": "Av. Juárez 120",
        "locality": "Centro",
        "municipality": null,
        "state": "CDMX",
        "postal_code": "06000",
        "country": "México",
        "phone": "5512345678",
        "email": "ventas@acme.mx",
        "website": "",
        "description": "Materiales y herramientas",
        "logo": null
    })
}

async fn get_profile(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
) -> Response {
    let path = v1::profile::CURRENT.to_string();
    record(&recorder, "GET", path, &headers, &Bytes::new()).await;
    Json(json!({"status": "success", "data": profile_json()})).into_response()
}

async fn put_profile(
    State(recorder): State<Recorder>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    record(&recorder, "PUT", format!("profile/{id}"), &headers, &body).await;
    if id == "7" {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status": "error",
                "error": format!("Company profile {id} not found")
            })),
        )
            .into_response()
    }
}

async fn put_logo(
    State(recorder): State<Recorder>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    record(&recorder, "PUT", format!("profile/{id}/logo"), &headers, &body)
        .await;
    StatusCode::NO_CONTENT
}

async fn list_links(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
) -> Response {
    record(&recorder, "GET", "social-links".into(), &headers, &Bytes::new())
        .await;
    Json(json!({
        "status": "success",
        "data": [
            {"id": "fb-1", "network": "Facebook", "value": "https://facebook.com/acme"},
            {"id": 2, "network": "tiktok", "value": "https://tiktok.com/@acme"},
            {"id": 3, "network": "whatsapp", "value": "+525512345678", "verified": true}
        ]
    }))
    .into_response()
}

async fn create_link(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    record(&recorder, "POST", "social-links".into(), &headers, &body).await;
    let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": {
                "id": 11,
                "network": request["network"],
                "value": request["value"],
                "created_at": "2025-01-01T00:00:00Z"
            }
        })),
    )
        .into_response()
}

async fn update_link(
    State(recorder): State<Recorder>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    record(&recorder, "PUT", format!("social-links/{id}"), &headers, &body)
        .await;
    StatusCode::NO_CONTENT
}

async fn delete_link(
    State(recorder): State<Recorder>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let path = format!("social-links/{id}");
    record(&recorder, "DELETE", path, &headers, &Bytes::new()).await;
    if id == "locked" {
        (
            StatusCode::CONFLICT,
            Json(json!({"status": "error", "message": "Link is locked"})),
        )
            .into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

fn backend(recorder: Recorder) -> Router {
    Router::new()
        .route(v1::profile::CURRENT, get(get_profile))
        .route(v1::profile::ITEM, put(put_profile))
        .route(v1::profile::LOGO, put(put_logo))
        .route(
            v1::social_links::COLLECTION,
            get(list_links).post(create_link),
        )
        .route(
            v1::social_links::ITEM,
            put(update_link).delete(delete_link),
        )
        .with_state(recorder)
}

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn services_for(base_url: &str) -> (Arc<ApiClient>, Services) {
    let client =
        Arc::new(ApiClient::new(base_url, Duration::from_secs(5)).unwrap());
    (client.clone(), Services::from_client(client))
}

#[tokio::test]
async fn fetch_profile_unwraps_envelope() {
    let recorder = Recorder::default();
    let base = spawn(backend(recorder.clone())).await;
    let (client, services) = services_for(&base).await;
    client.set_token(Some("secret".into())).await;

    let profile = services
        .profile
        .fetch_profile()
        .await
        .unwrap()
        .expect("profile present");

    assert_eq!(profile.id, ProfileId::new(7));
    assert_eq!(profile.fields.name, "Ferretería Acme");
    assert_eq!(profile.fields.municipality, "");
    assert!(profile.logo.is_none());
    let calls = recorder.lock().await;
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer secret"));
}

#[tokio::test]
async fn missing_profile_maps_to_none() {
    let router = Router::new().route(
        v1::profile::CURRENT,
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"status": "error", "error": "No profile"})),
            )
        }),
    );
    let base = spawn(router).await;
    let (_, services) = services_for(&base).await;

    assert!(services.profile.fetch_profile().await.unwrap().is_none());
}

#[tokio::test]
async fn profile_update_sends_every_field() {
    let recorder = Recorder::default();
    let base = spawn(backend(recorder.clone())).await;
    let (_, services) = services_for(&base).await;
    let profile = services.profile.fetch_profile().await.unwrap().unwrap();

    services
        .profile
        .update_profile(&profile.id, &profile.fields.clone().into())
        .await
        .unwrap();

    let calls = recorder.lock().await;
    let put = calls.iter().find(|c| c.method == "PUT").expect("put call");
    assert_eq!(put.path, "profile/7");
    assert_eq!(put.content_type.as_deref(), Some("application/json"));
    let body: Value = serde_json::from_str(&put.body).unwrap();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 12);
    assert_eq!(object["postal_code"], "06000");
    assert!(!object.contains_key("id"));
}

#[tokio::test]
async fn error_envelope_message_is_surfaced() {
    let recorder = Recorder::default();
    let base = spawn(backend(recorder.clone())).await;
    let (_, services) = services_for(&base).await;

    let err = services
        .profile
        .update_profile(&ProfileId::new(99), &ProfileFields::default().into())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Company profile 99 not found"));

    let err = services
        .social_links
        .delete_link(&SocialLinkId::new("locked"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Link is locked"));
}

#[tokio::test]
async fn logo_upload_is_multipart() {
    let recorder = Recorder::default();
    let base = spawn(backend(recorder.clone())).await;
    let (_, services) = services_for(&base).await;

    services
        .profile
        .upload_logo(
            &ProfileId::new(7),
            LogoFile {
                file_name: "logo.png".into(),
                mime: "image/png".into(),
                bytes: b"not really a png".to_vec(),
            },
        )
        .await
        .unwrap();

    let calls = recorder.lock().await;
    let upload = &calls[0];
    assert_eq!(upload.path, "profile/7/logo");
    assert!(
        upload
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("multipart/form-data"))
    );
    assert!(upload.body.contains("name=\"id\""));
    assert!(upload.body.contains("name=\"logo\"; filename=\"logo.png\""));
    assert!(upload.body.contains("Content-Type: image/png"));
}

#[tokio::test]
async fn social_link_calls_round_trip() {
    let recorder = Recorder::default();
    let base = spawn(backend(recorder.clone())).await;
    let (_, services) = services_for(&base).await;

    let links = services.social_links.list_links().await.unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].id, SocialLinkId::new("fb-1"));
    assert_eq!(links[1].extra.get("verified"), Some(&json!(true)));

    let created = services
        .social_links
        .create_link(&SocialLinkRequest {
            network: NetworkType::Instagram,
            value: "https://instagram.com/acme".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, SocialLinkId::new(11));
    assert_eq!(created.network, NetworkType::Instagram);
    assert!(created.extra.contains_key("created_at"));

    services
        .social_links
        .update_link(
            &SocialLinkId::new("fb-1"),
            &SocialLinkRequest {
                network: NetworkType::Facebook,
                value: "https://facebook.com/acme.mx".into(),
            },
        )
        .await
        .unwrap();
    services
        .social_links
        .delete_link(&SocialLinkId::new(3))
        .await
        .unwrap();

    let calls = recorder.lock().await;
    let post: Value = serde_json::from_str(&calls[1].body).unwrap();
    assert_eq!(
        post,
        json!({"network": "instagram", "value": "https://instagram.com/acme"})
    );
    assert_eq!(calls[2].path, "social-links/fb-1");
    assert_eq!(calls[3].method, "DELETE");
    assert_eq!(calls[3].path, "social-links/3");
}

#[tokio::test]
async fn runtime_mounts_against_http_backend() {
    let recorder = Recorder::default();
    let base = spawn(backend(recorder.clone())).await;
    let (_, services) = services_for(&base).await;

    let mut runtime = Runtime::new(AppState::default(), services);
    runtime.mount().await;

    let state = runtime.state();
    assert_eq!(
        state.domains.profile.profile_id(),
        Some(&ProfileId::new(7))
    );
    assert_eq!(state.domains.social_links.links.len(), 2);
    assert!(state.notifications.is_empty());
}
