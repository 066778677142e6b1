use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Engineer {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dev {
    pub id: String,
    pub name: String,
    pub engineers: Vec<Engineer>,
}

/// Create/update body for an engineer. A client-sent `id` is ignored.
#[derive(Deserialize)]
pub struct EngineerInput {
    pub name: String,
    pub email: String,
}

/// Create/update body for a dev. A client-sent `id` is ignored.
#[derive(Deserialize)]
pub struct DevInput {
    pub name: String,
    #[serde(default)]
    pub engineers: Vec<Engineer>,
}

#[derive(Deserialize)]
pub struct AttachInput {
    pub id: String,
}

/// Insertion-ordered collections; lists come back in creation order.
#[derive(Default)]
pub struct Store {
    pub engineers: Vec<Engineer>,
    pub devs: Vec<Dev>,
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/engineers", get(list_engineers).post(create_engineer))
        .route("/engineers/id/{id}", get(get_engineer))
        .route("/engineers/{id}", put(update_engineer).delete(delete_engineer))
        .route("/dev", get(list_devs).post(create_dev))
        .route("/dev/id/{id}", get(get_dev))
        .route(
            "/dev/{id}",
            put(update_dev).delete(delete_dev).post(attach_engineer),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Short uppercase ids in the style of the real service, e.g. `G63RN`.
fn new_id() -> String {
    Uuid::new_v4().simple().to_string()[..5].to_uppercase()
}

fn not_found(kind: &str, id: &str) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("{kind} {id} not found"))
}

async fn list_engineers(State(db): State<Db>) -> Json<Vec<Engineer>> {
    Json(db.read().await.engineers.clone())
}

async fn create_engineer(
    State(db): State<Db>,
    Json(input): Json<EngineerInput>,
) -> (StatusCode, Json<Engineer>) {
    let engineer = Engineer {
        id: new_id(),
        name: input.name,
        email: input.email,
    };
    db.write().await.engineers.push(engineer.clone());
    (StatusCode::CREATED, Json(engineer))
}

async fn get_engineer(State(db): State<Db>, Path(id): Path<String>) -> ApiResult<Engineer> {
    let store = db.read().await;
    store
        .engineers
        .iter()
        .find(|e| e.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("engineer", &id))
}

async fn update_engineer(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<EngineerInput>,
) -> ApiResult<Engineer> {
    let mut store = db.write().await;
    let engineer = store
        .engineers
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| not_found("engineer", &id))?;
    engineer.name = input.name;
    engineer.email = input.email;
    Ok(Json(engineer.clone()))
}

async fn delete_engineer(State(db): State<Db>, Path(id): Path<String>) -> ApiResult<Engineer> {
    let mut store = db.write().await;
    let index = store
        .engineers
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| not_found("engineer", &id))?;
    Ok(Json(store.engineers.remove(index)))
}

async fn list_devs(State(db): State<Db>) -> Json<Vec<Dev>> {
    Json(db.read().await.devs.clone())
}

async fn create_dev(
    State(db): State<Db>,
    Json(input): Json<DevInput>,
) -> (StatusCode, Json<Dev>) {
    let dev = Dev {
        id: new_id(),
        name: input.name,
        engineers: input.engineers,
    };
    db.write().await.devs.push(dev.clone());
    (StatusCode::CREATED, Json(dev))
}

async fn get_dev(State(db): State<Db>, Path(id): Path<String>) -> ApiResult<Dev> {
    let store = db.read().await;
    store
        .devs
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("dev", &id))
}

async fn update_dev(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<DevInput>,
) -> ApiResult<Dev> {
    let mut store = db.write().await;
    let dev = store
        .devs
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or_else(|| not_found("dev", &id))?;
    dev.name = input.name;
    dev.engineers = input.engineers;
    Ok(Json(dev.clone()))
}

async fn delete_dev(State(db): State<Db>, Path(id): Path<String>) -> ApiResult<Dev> {
    let mut store = db.write().await;
    let index = store
        .devs
        .iter()
        .position(|d| d.id == id)
        .ok_or_else(|| not_found("dev", &id))?;
    Ok(Json(store.devs.remove(index)))
}

async fn attach_engineer(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<AttachInput>,
) -> ApiResult<Dev> {
    let mut store = db.write().await;
    let engineer = store
        .engineers
        .iter()
        .find(|e| e.id == input.id)
        .cloned()
        .ok_or_else(|| not_found("engineer", &input.id))?;
    let dev = store
        .devs
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or_else(|| not_found("dev", &id))?;
    dev.engineers.push(engineer);
    Ok(Json(dev.clone()))
}
