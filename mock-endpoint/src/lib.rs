use axum::{debug_handler, extract::Path, http::StatusCode, routing::get, Json, Router};
use lazy_static::lazy_static;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, RwLock,
};
use std::time::Duration;
use tracing::debug;

pub async fn run(addr: SocketAddr) {
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, router()).await.unwrap();
}

pub fn router() -> Router {
    Router::new()
        .route("/rows/:count", get(rows))
        .route("/rows/:count/delay/ms/:delay_ms", get(rows_delayed))
        .route("/flaky/:count/fail_every/:n/key/:key", get(flaky))
}

#[debug_handler]
async fn rows(Path(count): Path<u64>) -> Json<Vec<Value>> {
    Json(synthetic_rows(count))
}

#[debug_handler]
async fn rows_delayed(Path((count, delay_ms)): Path<(u64, u64)>) -> Json<Vec<Value>> {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    Json(synthetic_rows(count))
}

lazy_static! {
    static ref FLAKY_COUNTS: Arc<RwLock<HashMap<String, Arc<AtomicU64>>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

/// Every `n`-th request for a given key gets a 500, counted across the
/// process lifetime.
#[debug_handler]
async fn flaky(
    Path((count, n, key)): Path<(u64, u64, String)>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    let counter = {
        let read = FLAKY_COUNTS.read().unwrap().get(&key).cloned();
        match read {
            Some(counter) => counter,
            None => {
                let counter = Arc::new(AtomicU64::new(0));
                FLAKY_COUNTS
                    .write()
                    .unwrap()
                    .insert(key, counter.clone());
                counter
            }
        }
    };

    let request = counter.fetch_add(1, Ordering::Relaxed) + 1;
    if n != 0 && request % n == 0 {
        debug!("MOCK ENDPOINT ___ failing request {request}");
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(synthetic_rows(count)))
}

pub fn synthetic_rows(count: u64) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("record-{i}"),
                "value": i * 3,
            })
        })
        .collect()
}
