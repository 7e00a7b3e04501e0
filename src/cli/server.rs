//! HTTP server mode for REST access to folder listings
//!
//! Cursors travel as plain folder id strings and are only ever compared for
//! equality.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::PaginationSettings;
use crate::engine::{FetchFolderPageRequest, FolderPager};
use crate::error::{Error, Result};
use crate::provider::{FolderProvider, JsonFileProvider};
use crate::types::{FolderId, OrgId};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// JSON file holding the folder collection
    pub data_path: PathBuf,
    /// Page size policy applied to incoming requests
    pub pagination: PaginationSettings,
}

/// App state shared across handlers
struct AppState {
    pager: FolderPager<Arc<dyn FolderProvider>>,
    pagination: PaginationSettings,
}

/// Query string of the page endpoint
#[derive(Debug, Deserialize)]
struct PageQuery {
    /// Page size; the configured default when absent
    #[serde(default)]
    size: Option<usize>,
    /// Folder id the page starts at
    #[serde(default)]
    starting_at: Option<String>,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Error carried out of a handler
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else if matches!(self.0, Error::Provider(_)) {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "folder request failed");
        }
        (status, Json(ApiResponse::<()>::error(self.0.to_string()))).into_response()
    }
}

/// Build the router over any provider
pub fn router(provider: Arc<dyn FolderProvider>, pagination: PaginationSettings) -> Router {
    let state = AppState {
        pager: FolderPager::new(provider),
        pagination,
    };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/orgs/:org_id/folders", get(list_folders))
        .route("/orgs/:org_id/folders/page", get(page_folders))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let provider: Arc<dyn FolderProvider> = Arc::new(JsonFileProvider::new(&config.data_path));
    let app = router(provider, config.pagination);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(data = %config.data_path.display(), "Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

fn parse_org(raw: &str) -> Result<OrgId> {
    raw.parse::<OrgId>()
        .map_err(|e| Error::invalid_request(format!("invalid organization id '{raw}': {e}")))
}

fn parse_cursor(raw: Option<&str>) -> Result<Option<FolderId>> {
    raw.filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<FolderId>()
                .map_err(|e| Error::invalid_request(format!("invalid cursor '{s}': {e}")))
        })
        .transpose()
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Every folder of an organization
async fn list_folders(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<String>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let org_id = parse_org(&org_id)?;
    let response = state.pager.fetch_all(org_id).await?;
    Ok(Json(ApiResponse::success(response)))
}

/// One page of an organization's folders
async fn page_folders(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let org_id = parse_org(&org_id)?;
    let size = state.pagination.resolve_size(query.size)?;
    let starting_at = parse_cursor(query.starting_at.as_deref())?;

    let request = FetchFolderPageRequest::new(org_id, size).starting_at(starting_at);
    let page = state.pager.fetch_page(&request).await?;
    Ok(Json(ApiResponse::success(page)))
}
