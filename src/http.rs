use crate::error::{GedviewError, Result};
use crate::render;
use crate::resolve::Resolver;
use crate::store::RecordStore;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// HTTP front end serving individual pages and their JSON form
pub struct HttpServer<S> {
    resolver: Arc<Resolver<S>>,
}

impl<S: RecordStore + 'static> HttpServer<S> {
    pub fn new(resolver: Resolver<S>) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Bind `addr` and serve until the process is stopped
    pub async fn run(&self, addr: &str) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GedviewError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to bind to {}: {}", addr, e),
            )))?;

        log::info!("Serving individuals on http://{}", addr);

        axum::serve(listener, self.router())
            .await
            .map_err(|e| GedviewError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("HTTP server error: {}", e),
            )))?;

        Ok(())
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(handle_individual_page::<S>))
            .route("/sources", get(handle_sources))
            .route("/api/individuals/:id", get(handle_individual_json::<S>))
            .route("/health", get(handle_health))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(AppState {
                resolver: Arc::clone(&self.resolver),
            })
    }
}

struct AppState<S> {
    resolver: Arc<Resolver<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IndividualQuery {
    i_id: Option<String>,
}

fn internal_error(id: &str, err: GedviewError) -> (StatusCode, &'static str) {
    log::error!("Failed to resolve individual {}: {}", id, err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load individual")
}

async fn handle_individual_page<S: RecordStore + 'static>(
    State(state): State<AppState<S>>,
    Query(query): Query<IndividualQuery>,
) -> Response {
    let Some(id) = query.i_id.filter(|id| !id.trim().is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Query field 'i_id' is required.").into_response();
    };

    match state.resolver.resolve_individual(&id).await {
        Ok(Some(individual)) => Html(render::individual_page(&individual)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Html(render::not_found_page(&id))).into_response(),
        Err(e) => internal_error(&id, e).into_response(),
    }
}

async fn handle_sources() -> Response {
    (StatusCode::NOT_FOUND, Html(render::not_found_page("sources"))).into_response()
}

async fn handle_individual_json<S: RecordStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Response {
    match state.resolver.resolve_individual(&id).await {
        Ok(Some(individual)) => Json(individual).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "individual not found", "id": id })),
        )
            .into_response(),
        Err(e) => {
            let (status, message) = internal_error(&id, e);
            (status, Json(json!({ "error": message, "id": id }))).into_response()
        }
    }
}

async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
