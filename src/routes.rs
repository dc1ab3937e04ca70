//! HTTP surface.
//!
//! Page routes answer the view model its loader produced; admin page routes
//! run the session check first and answer 303 to the login route when it
//! fails. The JSON API under `/api` uses 401 instead of a redirect for the
//! admin mutations, 400 for missing input, and 404 only on the admin edit
//! route where absence is fatal.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth::{self, AuthCheck};
use crate::color;
use crate::config::Config;
use crate::error::AppError;
use crate::i18n::{Language, LanguageStore};
use crate::loaders;
use crate::models::{ProjectPatch, TechColor};
use crate::supabase::SupabaseClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<SupabaseClient>,
    pub language: Arc<LanguageStore>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Public pages
        .route("/", get(home_page))
        .route("/projects", get(projects_page))
        .route("/about", get(about_page))
        // Admin pages (303 to login without a session)
        .route("/admin", get(admin_page))
        .route("/admin/projects", get(admin_projects_page))
        .route("/admin/edit/:id", get(admin_edit_page))
        // JSON API
        .route("/api/layout", get(layout_data))
        .route("/api/language", get(current_language).post(switch_language))
        .route("/api/generate-color", post(generate_color))
        .route("/api/admin/projects/:id", put(update_project))
        .route("/api/admin/technologies", post(upsert_technology))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ==================== Public pages ====================

pub async fn home_page(State(state): State<AppState>) -> Json<loaders::HomeData> {
    Json(loaders::home(&state.db).await)
}

pub async fn projects_page(State(state): State<AppState>) -> Json<loaders::ProjectsData> {
    Json(loaders::projects(&state.db).await)
}

pub async fn about_page(State(state): State<AppState>) -> Json<loaders::AboutData> {
    Json(loaders::about(&state.db).await)
}

pub async fn layout_data(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<loaders::LayoutData> {
    let token = auth::access_token(&headers);
    Json(loaders::layout(&state.db, token.as_deref()).await)
}

// ==================== Admin pages ====================

pub async fn admin_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let token = auth::access_token(&headers);
    match auth::require_session(&state.db, &state.config, token.as_deref()).await {
        AuthCheck::Redirect(target) => Redirect::to(&target).into_response(),
        AuthCheck::Authorized(session) => {
            Json(loaders::admin_dashboard(&state.db, &session).await).into_response()
        }
    }
}

pub async fn admin_projects_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let token = auth::access_token(&headers);
    match auth::require_session(&state.db, &state.config, token.as_deref()).await {
        AuthCheck::Redirect(target) => Redirect::to(&target).into_response(),
        AuthCheck::Authorized(session) => {
            Json(loaders::admin_projects(&state.db, &session).await).into_response()
        }
    }
}

pub async fn admin_edit_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let token = auth::access_token(&headers);
    let session = match auth::require_session(&state.db, &state.config, token.as_deref()).await {
        AuthCheck::Redirect(target) => return Redirect::to(&target).into_response(),
        AuthCheck::Authorized(session) => session,
    };

    match loaders::admin_project(&state.db, &session, id).await {
        Ok(project) => Json(project).into_response(),
        Err(_) => AppError::NotFound("Prosjektet ble ikke funnet".to_string()).into_response(),
    }
}

// ==================== Language ====================

#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub language: String,
}

pub async fn current_language(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "language": state.language.get().code() }))
}

pub async fn switch_language(
    State(state): State<AppState>,
    Json(payload): Json<LanguageRequest>,
) -> Response {
    match Language::from_code(&payload.language) {
        Ok(language) => {
            state.language.set(language);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(_) => AppError::UnsupportedLanguage(payload.language).into_response(),
    }
}

// ==================== Color suggestion ====================

#[derive(Debug, Deserialize)]
pub struct GenerateColorRequest {
    #[serde(rename = "techName")]
    pub tech_name: Option<String>,
}

pub async fn generate_color(
    State(state): State<AppState>,
    Json(payload): Json<GenerateColorRequest>,
) -> Response {
    let tech_name = payload.tech_name.as_deref().unwrap_or("").trim().to_string();
    if tech_name.is_empty() {
        return AppError::MissingInput("Tech name").into_response();
    }

    match color::suggest_color(&state.config, &tech_name).await {
        Ok(color) => Json(json!({ "color": color })).into_response(),
        Err(e) => AppError::Upstream(e).into_response(),
    }
}

// ==================== Admin mutations ====================

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(patch): Json<ProjectPatch>,
) -> Response {
    let token = auth::access_token(&headers);
    let session = match auth::require_session(&state.db, &state.config, token.as_deref()).await {
        AuthCheck::Redirect(_) => return AppError::Unauthorized.into_response(),
        AuthCheck::Authorized(session) => session,
    };

    match state
        .db
        .from("projects")
        .authenticated(&session)
        .eq("id", id)
        .update(&patch)
        .await
    {
        Ok(()) => {
            info!("Project {} updated by {}", id, session.user.id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => AppError::Upstream(e).into_response(),
    }
}

pub async fn upsert_technology(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(tech): Json<TechColor>,
) -> Response {
    let token = auth::access_token(&headers);
    let session = match auth::require_session(&state.db, &state.config, token.as_deref()).await {
        AuthCheck::Redirect(_) => return AppError::Unauthorized.into_response(),
        AuthCheck::Authorized(session) => session,
    };

    if tech.name.trim().is_empty() {
        return AppError::MissingInput("Technology name").into_response();
    }
    if !color::is_valid_hex(&tech.color) {
        return AppError::MissingInput("A valid hex color").into_response();
    }

    match state
        .db
        .from("technologies")
        .authenticated(&session)
        .upsert(&tech, "name")
        .await
    {
        Ok(()) => {
            info!("Technology color saved: {} = {}", tech.name, tech.color);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => AppError::Upstream(e).into_response(),
    }
}
