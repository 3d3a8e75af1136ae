use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    body::Bytes,
    extract::{Multipart, Path, Query, Request, State},
    http::{header, HeaderMap, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const DEFAULT_TOKEN: &str = "test-token";

const TIMESTAMP: &str = "2024-01-01T00:00:00Z";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Space {
    pub id: u64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    pub member_count: u64,
}

#[derive(Deserialize)]
pub struct CreateSpace {
    pub name: String,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateSpace {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    spaces: BTreeMap<(u64, u64), Space>,
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct AppState {
    token: Arc<str>,
    db: Db,
    hits: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new(token: &str) -> Self {
        Self {
            token: Arc::from(token),
            db: Arc::new(RwLock::new(Store::default())),
            hits: Arc::new(AtomicUsize::new(0)),
        }
    }
}

/// Router emulating the admin API. Every route except `/__hits` requires
/// `Authorization: Bearer <token>` and is counted in the hit counter.
pub fn app(token: &str) -> Router {
    let state = AppState::new(token);
    let api = Router::new()
        .route("/admin/v1/networks/{network_id}", get(show_network))
        .route("/admin/v1/networks/{network_id}/me", get(show_me))
        .route(
            "/admin/v1/networks/{network_id}/spaces",
            get(list_spaces).post(create_space),
        )
        .route(
            "/admin/v1/networks/{network_id}/spaces/{space_id}",
            get(get_space).patch(update_space).delete(delete_space),
        )
        .route("/admin/v1/networks/{network_id}/assets", post(upload_asset))
        .route("/echo", any(echo))
        .route("/status/{code}", any(status_json))
        .route("/status/{code}/text", any(status_text))
        .route("/empty", get(empty))
        .route("/text", get(plain_text))
        .route("/slow", get(slow))
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    Router::new()
        .route("/__hits", get(hits))
        .merge(api)
        .with_state(state)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

async fn authorize(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let expected = format!("Bearer {}", state.token);
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if presented == Some(expected.as_str()) {
        next.run(request).await
    } else {
        tracing::debug!(path = %request.uri().path(), "rejecting request without valid token");
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "invalid or expired API token"})),
        )
            .into_response()
    }
}

async fn hits(State(state): State<AppState>) -> Json<Value> {
    Json(json!({"hits": state.hits.load(Ordering::SeqCst)}))
}

async fn show_network(Path(network_id): Path<u64>) -> Json<Value> {
    Json(json!({
        "id": network_id,
        "name": "Mock Network",
        "subdomain": "mock",
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP,
    }))
}

async fn show_me(Path(network_id): Path<u64>) -> Json<Value> {
    Json(json!({
        "id": 1,
        "email": "owner@example.com",
        "first_name": "Mock",
        "last_name": "Owner",
        "permalink": format!("networks/{network_id}/members/1"),
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP,
    }))
}

async fn list_spaces(State(state): State<AppState>, Path(network_id): Path<u64>) -> Json<Value> {
    let store = state.db.read().await;
    let items: Vec<&Space> = store
        .spaces
        .range((network_id, 0)..=(network_id, u64::MAX))
        .map(|(_, space)| space)
        .collect();
    Json(json!({
        "items": items,
        "links": {"self": format!("/admin/v1/networks/{network_id}/spaces")},
    }))
}

async fn create_space(
    State(state): State<AppState>,
    Path(network_id): Path<u64>,
    Json(input): Json<CreateSpace>,
) -> (StatusCode, Json<Space>) {
    let mut store = state.db.write().await;
    store.next_id += 1;
    let space = Space {
        id: store.next_id,
        name: input.name,
        created_at: TIMESTAMP.to_string(),
        updated_at: TIMESTAMP.to_string(),
        description: input.description,
        is_public: input.is_public,
        member_count: 0,
    };
    store.spaces.insert((network_id, space.id), space.clone());
    (StatusCode::CREATED, Json(space))
}

async fn get_space(
    State(state): State<AppState>,
    Path((network_id, space_id)): Path<(u64, u64)>,
) -> Result<Json<Space>, StatusCode> {
    let store = state.db.read().await;
    store
        .spaces
        .get(&(network_id, space_id))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_space(
    State(state): State<AppState>,
    Path((network_id, space_id)): Path<(u64, u64)>,
    Json(input): Json<UpdateSpace>,
) -> Result<Json<Space>, StatusCode> {
    let mut store = state.db.write().await;
    let space = store
        .spaces
        .get_mut(&(network_id, space_id))
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        space.name = name;
    }
    if let Some(description) = input.description {
        space.description = Some(description);
    }
    if let Some(is_public) = input.is_public {
        space.is_public = Some(is_public);
    }
    Ok(Json(space.clone()))
}

async fn delete_space(
    State(state): State<AppState>,
    Path((network_id, space_id)): Path<(u64, u64)>,
) -> Result<StatusCode, StatusCode> {
    let mut store = state.db.write().await;
    store
        .spaces
        .remove(&(network_id, space_id))
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn upload_asset(
    Path(network_id): Path<u64>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let mut fields = Map::new();
    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                file = Some(json!({
                    "field": name,
                    "filename": file_name,
                    "content_type": content_type,
                    "size": bytes.len(),
                }));
            }
            None => {
                let text = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                fields.insert(name, Value::String(text));
            }
        }
    }
    let file = file.ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({"network_id": network_id, "file": file, "fields": fields})),
    ))
}

/// Reflect the request back so clients can inspect what went on the wire.
async fn echo(
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    let headers: BTreeMap<String, String> = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    Json(json!({
        "method": method.as_str(),
        "query": query,
        "headers": headers,
        "body": body,
    }))
}

async fn status_json(Path(code): Path<u16>) -> Response {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"error": format!("status {code}")}))).into_response()
}

async fn status_text(Path(code): Path<u16>) -> Response {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, "upstream exploded").into_response()
}

async fn empty() -> StatusCode {
    StatusCode::OK
}

async fn plain_text() -> &'static str {
    "not json at all"
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(2)).await;
    Json(json!({"slow": true}))
}
