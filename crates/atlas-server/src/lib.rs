//! atlas-server
//! ============
//!
//! HTTP service behind the India Atlas site.
//!
//! Routes
//! ------
//!
//! | route | response |
//! |-------|----------|
//! | `GET /health` | service status |
//! | `GET /api/state-data` | `<data-dir>/stateData.json`, or `{}` |
//! | `GET /api/india-states` | `<data-dir>/india_states.geojson`, or `{}` |
//! | `GET /api/config` | the active site configuration |
//! | `GET /api/panel/{state}?tab=` | rendered panel fragment |
//! | `GET /` | `<site-root>/index.html` |
//! | `GET /static/*`, `GET /pkg/*` | files under those two trees of the site root |
//! | everything else | 404 |
//!
//! Nothing else under the site root is reachable, so the root can be a
//! source checkout.
//! A missing data file is not an error: the browser substitutes its own
//! fallbacks when it receives `{}`. A data file that exists but cannot be
//! read or parsed is reported as a 500.

use atlas_core::loader::{self, INDIA_STATES_FILE, STATE_DATA_FILE};
use atlas_core::{render_tab, AtlasConfig, AtlasError, LayeredTable, StateTable, Tab};
use axum::extract::{Path as UrlPath, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Where the site's files live and how it is configured.
#[derive(Debug, Clone)]
pub struct Site {
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub config: AtlasConfig,
}

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<Site>,
}

/// Build the full application router.
pub fn router(site: Site) -> Router {
    let index = ServeFile::new(site.static_dir.join("index.html"));
    let assets = ServeDir::new(site.static_dir.join("static"));
    let pkg = ServeDir::new(site.static_dir.join("pkg"));

    let state = AppState {
        site: Arc::new(site),
    };

    let api = Router::new()
        .route("/state-data", get(state_data))
        .route("/india-states", get(india_states))
        .route("/config", get(config))
        .route("/panel/:state", get(panel))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .route_service("/", index)
        .nest_service("/static", assets)
        .nest_service("/pkg", pkg)
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

// ========== Errors ==========

/// [`AtlasError`] with an HTTP status attached.
#[derive(Debug)]
pub struct ApiError(AtlasError);

impl From<AtlasError> for ApiError {
    fn from(e: AtlasError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AtlasError::UnknownTab(_) => StatusCode::BAD_REQUEST,
            AtlasError::NotFound(_) => StatusCode::NOT_FOUND,
            AtlasError::Io(_) | AtlasError::Json(_) | AtlasError::InvalidGeoJson(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            tracing::error!("{}", self.0);
        } else {
            tracing::debug!("{}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

// ========== Handlers ==========

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "atlas-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Read a data file off the async runtime. `Ok(None)` when it is absent.
async fn read_data_file(dir: &Path, name: &'static str) -> Result<Option<String>, ApiError> {
    let Some(path) = loader::locate(dir, name) else {
        tracing::debug!("{name} not found in {}, serving empty object", dir.display());
        return Ok(None);
    };
    let text = tokio::task::spawn_blocking(move || loader::read_text(&path))
        .await
        .map_err(|e| AtlasError::Io(std::io::Error::other(e)))??;
    Ok(Some(text))
}

async fn state_data(State(app): State<AppState>) -> Result<Json<Value>, ApiError> {
    match read_data_file(&app.site.data_dir, STATE_DATA_FILE).await? {
        Some(text) => Ok(Json(
            serde_json::from_str(&text).map_err(AtlasError::from)?,
        )),
        None => Ok(Json(json!({}))),
    }
}

async fn india_states(State(app): State<AppState>) -> Result<Response, ApiError> {
    match read_data_file(&app.site.data_dir, INDIA_STATES_FILE).await? {
        Some(text) => Ok(([(header::CONTENT_TYPE, "application/geo+json")], text).into_response()),
        None => Ok(Json(json!({})).into_response()),
    }
}

async fn config(State(app): State<AppState>) -> Json<AtlasConfig> {
    Json(app.site.config.clone())
}

#[derive(Debug, Deserialize)]
struct PanelQuery {
    tab: Option<String>,
}

async fn panel(
    State(app): State<AppState>,
    UrlPath(state): UrlPath<String>,
    Query(q): Query<PanelQuery>,
) -> Result<Html<String>, ApiError> {
    let tab = match q.tab.as_deref() {
        Some(t) => t.parse::<Tab>()?,
        None => Tab::default(),
    };
    // Served data is optional here too; a broken file only loses its overlay.
    let remote = match read_data_file(&app.site.data_dir, STATE_DATA_FILE).await {
        Ok(Some(text)) => loader::parse_state_table_or_empty(&text),
        Ok(None) => StateTable::default(),
        Err(e) => {
            tracing::warn!("state data unreadable, rendering bundled tables only: {:?}", e.0);
            StateTable::default()
        }
    };
    let tables = LayeredTable::new(&remote, atlas_core::tables::embedded());
    let view = render_tab(&state, tab, &tables, &app.site.config);
    Ok(Html(view.body))
}
