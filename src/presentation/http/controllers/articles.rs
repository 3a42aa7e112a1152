// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleListView, ArticleView, CallerOrigin, CreateFormView, EditFormView},
    queries::articles::{EditArticleFormQuery, GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::PeerOrigin;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::{Path, RawQuery, rejection::FormRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// 1-based page number. Missing, non-numeric or non-positive values mean page 1.
    pub page: Option<String>,
}

impl ArticleListParams {
    /// Read `page` from a raw query string. The first occurrence wins, and a
    /// query that does not decode at all is treated as having no page.
    pub fn from_raw_query(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|query| serde_urlencoded::from_str::<Vec<(String, String)>>(query).ok())
            .and_then(|pairs| {
                pairs
                    .into_iter()
                    .find_map(|(key, value)| (key == "page").then_some(value))
            });
        Self { page }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateArticleForm {
    pub title: String,
    pub body: String,
    /// `yyyy-MM-dd HH:mm:ss`
    pub publish_date: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateArticleForm {
    pub title: String,
    pub body: String,
}

/// Unwrap a decoded form, or answer for one that failed to decode. The admin
/// gate runs first so a non-admin gets the same 404 whatever the body holds.
async fn form_or_reject<T>(
    state: &HttpState,
    origin: &CallerOrigin,
    form: Result<Form<T>, FormRejection>,
) -> HttpResult<T> {
    match form {
        Ok(Form(form)) => Ok(form),
        Err(rejection) => {
            state
                .services
                .article_commands
                .authorize(origin)
                .await
                .into_http()?;
            Err(HttpError::bad_request(rejection.body_text()))
        }
    }
}

/// 302 Found. `axum::response::Redirect` only offers 303/307/308.
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 302, description = "Redirect to the article listing.")),
    tag = "Articles"
)]
pub async fn index() -> Response {
    found("/articles".into())
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleListParams),
    responses((status = 200, description = "One page of articles, newest first.", body = ArticleListView)),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    PeerOrigin(origin): PeerOrigin,
    RawQuery(query): RawQuery,
) -> HttpResult<Json<ArticleListView>> {
    let params = ArticleListParams::from_raw_query(query.as_deref());
    state
        .services
        .article_queries
        .list_articles(&origin, ListArticlesQuery { page: params.page })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/new",
    responses(
        (status = 200, description = "Empty create form.", body = CreateFormView),
        (status = 404, description = "Caller is not an admin.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn new_article_form(
    Extension(state): Extension<HttpState>,
    PeerOrigin(origin): PeerOrigin,
) -> HttpResult<Json<CreateFormView>> {
    state
        .services
        .article_queries
        .create_form(&origin)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body(content = CreateArticleForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Created; redirects to the new article."),
        (status = 304, description = "The store did not save the article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 400, description = "Unparseable publish date or empty title.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Caller is not an admin.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    PeerOrigin(origin): PeerOrigin,
    form: Result<Form<CreateArticleForm>, FormRejection>,
) -> HttpResult<Response> {
    let form = form_or_reject(&state, &origin, form).await?;
    let command = CreateArticleCommand {
        title: form.title,
        body: form.body,
        publish_date: form.publish_date,
    };

    let created = state
        .services
        .article_commands
        .create_article(&origin, command)
        .await
        .into_http()?;

    Ok(found(format!("/articles/{}", created.id)))
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleView),
        (status = 404, description = "The article no longer exists.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn show_article(
    Extension(state): Extension<HttpState>,
    PeerOrigin(origin): PeerOrigin,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleView>> {
    state
        .services
        .article_queries
        .get_article_by_id(&origin, GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{id}/edit",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Edit form prefilled with the article.", body = EditFormView),
        (status = 404, description = "Not an admin, or the article no longer exists.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn edit_article_form(
    Extension(state): Extension<HttpState>,
    PeerOrigin(origin): PeerOrigin,
    Path(id): Path<String>,
) -> HttpResult<Json<EditFormView>> {
    state
        .services
        .article_queries
        .edit_form(&origin, EditArticleFormQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    request_body(content = UpdateArticleForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Updated; redirects to the article."),
        (status = 304, description = "The store did not save the change.", body = crate::presentation::http::error::ErrorResponse),
        (status = 400, description = "The article no longer exists or the title is empty.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Caller is not an admin.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    PeerOrigin(origin): PeerOrigin,
    Path(id): Path<String>,
    form: Result<Form<UpdateArticleForm>, FormRejection>,
) -> HttpResult<Response> {
    let form = form_or_reject(&state, &origin, form).await?;
    let command = UpdateArticleCommand {
        id,
        title: form.title,
        body: form.body,
    };

    let updated = state
        .services
        .article_commands
        .update_article(&origin, command)
        .await
        .into_http_mutation()?;

    Ok(found(format!("/articles/{}", updated.id)))
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 302, description = "Deleted; redirects to the listing."),
        (status = 304, description = "The store did not delete the article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 400, description = "The article no longer exists.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Caller is not an admin.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    PeerOrigin(origin): PeerOrigin,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    state
        .services
        .article_commands
        .delete_article(&origin, DeleteArticleCommand { id })
        .await
        .into_http_mutation()?;

    Ok(found("/articles".into()))
}
