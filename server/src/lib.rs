use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use search_core::{Book, Indexable, SearchEngine, DEFAULT_MAX_RESULTS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const DEFAULT_RESULT_CAP: usize = 100;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_k")]
    pub k: usize,
}
fn default_k() -> usize { DEFAULT_MAX_RESULTS }

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub id: String,
    pub score: f32,
    pub title: String,
    pub author: String,
}

#[derive(Serialize)]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub author: String,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self { id: book.id().to_string(), title: book.title.clone(), author: book.author.clone() }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine<Book>>,
    /// Upper bound applied to `k`.
    pub max_results: usize,
}

pub fn build_app(engine: SearchEngine<Book>, max_results: usize) -> Router {
    let app_state = AppState { engine: Arc::new(engine), max_results };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/book/:id", get(book_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let k = params.k.min(state.max_results);
    let page = state.engine.search_page(&params.q, k);
    let results = page
        .results
        .iter()
        .map(|r| SearchHit {
            id: r.document.id().to_string(),
            score: r.score,
            title: r.document.title.clone(),
            author: r.document.author.clone(),
        })
        .collect();
    let elapsed = start.elapsed();
    Json(SearchResponse { query: params.q, took_s: elapsed.as_secs_f64(), total_hits: page.total_hits, results })
}

pub async fn book_handler(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<BookResponse>, (StatusCode, String)> {
    state
        .engine
        .get(&id)
        .map(|book| Json(BookResponse::from(book)))
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("book `{id}` not found")))
}
