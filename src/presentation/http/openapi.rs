// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::index,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::new_article_form,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::show_article,
        crate::presentation::http::controllers::articles::edit_article_form,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleForm,
            crate::presentation::http::controllers::articles::UpdateArticleForm,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleListView,
            crate::application::dto::ArticleView,
            crate::application::dto::CreateFormView,
            crate::application::dto::EditFormView
        )
    ),
    tags(
        (name = "Articles", description = "Article listing and admin-only editing"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "GameNews API",
        description = "Paginated news articles with an IP-based admin gate",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
