use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{Html, Redirect};
use chrono::Local;
use serde::{Deserialize, Serialize};

use super::error::ApiResult;
use crate::adapters::MinijinjaPageRenderer;
use crate::app::AppContext;
use crate::app::commands::{deploy, generate, preview, sections};
use crate::domain::{ColorPalette, DeployResult, PortfolioDocument, Section, palette};
use crate::ports::{DocumentStore, GitPort};

/// Handler state: one context shared by every request.
pub type SharedContext<S, G> = Arc<AppContext<S, G, MinijinjaPageRenderer>>;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    fn ok() -> Self {
        Self { success: true, message: None }
    }
}

#[derive(Debug, Deserialize)]
pub struct SectionsRequest {
    #[serde(default)]
    pub order: Option<Vec<Section>>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub async fn index() -> Redirect {
    Redirect::to("/admin")
}

pub async fn admin<S: DocumentStore, G: GitPort>(
    State(ctx): State<SharedContext<S, G>>,
) -> ApiResult<Html<String>> {
    let document = ctx.store().load();
    Ok(Html(ctx.renderer().render_admin(&document)?))
}

pub async fn save_portfolio<S: DocumentStore, G: GitPort>(
    State(ctx): State<SharedContext<S, G>>,
    Json(document): Json<PortfolioDocument>,
) -> ApiResult<Json<StatusResponse>> {
    ctx.store().save(&document)?;
    tracing::info!("Portfolio document saved");
    Ok(Json(StatusResponse::ok()))
}

pub async fn explain<S: DocumentStore, G: GitPort>(
    State(ctx): State<SharedContext<S, G>>,
) -> ApiResult<Html<String>> {
    Ok(Html(ctx.renderer().render_explain()?))
}

pub async fn get_portfolio<S: DocumentStore, G: GitPort>(
    State(ctx): State<SharedContext<S, G>>,
) -> Json<PortfolioDocument> {
    Json(ctx.store().load())
}

pub async fn list_schemes() -> Json<Vec<ColorPalette>> {
    Json(palette::PALETTES.to_vec())
}

pub async fn update_sections<S: DocumentStore, G: GitPort>(
    State(ctx): State<SharedContext<S, G>>,
    Json(request): Json<SectionsRequest>,
) -> ApiResult<Json<StatusResponse>> {
    sections::execute(ctx.as_ref(), request.order)?;
    Ok(Json(StatusResponse::ok()))
}

pub async fn preview<S: DocumentStore, G: GitPort>(
    State(ctx): State<SharedContext<S, G>>,
) -> ApiResult<Html<String>> {
    Ok(Html(preview::execute(ctx.as_ref())?))
}

pub async fn generate<S: DocumentStore, G: GitPort>(
    State(ctx): State<SharedContext<S, G>>,
) -> ApiResult<Json<StatusResponse>> {
    generate::execute(ctx.as_ref())?;
    Ok(Json(StatusResponse {
        success: true,
        message: Some(format!(
            "Portfolio generated at {}",
            ctx.paths().output_file_relative()
        )),
    }))
}

pub async fn deploy<S: DocumentStore, G: GitPort>(
    State(ctx): State<SharedContext<S, G>>,
) -> Json<DeployResult> {
    Json(deploy::execute(ctx.as_ref(), Local::now().naive_local()).await)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", version: env!("CARGO_PKG_VERSION") })
}
