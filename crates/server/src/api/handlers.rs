//! HTTP handlers for the article endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use seoscore_core::{ScoreReport, ScoreStats, compute_seo_score};
use uuid::Uuid;

use super::errors::ApiError;
use super::models::{
    CreateArticleRequest, DeleteResponse, HealthResponse, ScoreArticleRequest, ScoreRequest, UpdateArticleRequest,
};
use crate::store::{ArticleRecord, ArticleStore};

/// Maximum number of articles returned by `GET /articles`.
pub const LIST_LIMIT: usize = 100;

#[derive(Clone)]
pub struct AppState {
    pub store: ArticleStore,
}

impl AppState {
    pub fn new(store: ArticleStore) -> Self {
        Self { store }
    }
}

type JsonBody<T> = Result<Json<T>, JsonRejection>;

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::BadRequest(format!("Invalid article id: {}", id)))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy", store: state.store.backend() })
}

/// `GET /articles`
pub async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<ArticleRecord>>, ApiError> {
    Ok(Json(state.store.list(LIST_LIMIT).await?))
}

/// `POST /articles`
pub async fn create_article(
    State(state): State<AppState>, body: JsonBody<CreateArticleRequest>,
) -> Result<(StatusCode, Json<ArticleRecord>), ApiError> {
    let Json(req) = body?;

    let mut record = ArticleRecord::new(req.topic, req.primary_keyword, req.secondary_keywords, req.article);
    record.seo_score = Some(compute_seo_score(&record.article, &record.primary_keyword, &record.secondary_keywords));
    state.store.insert(&record).await?;

    tracing::info!(
        id = %record.id,
        percentage = record.seo_score.as_ref().map(|s| s.percentage),
        "Article created"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /articles/{id}`
pub async fn get_article(
    State(state): State<AppState>, Path(id): Path<String>,
) -> Result<Json<ArticleRecord>, ApiError> {
    let id = parse_id(&id)?;
    let record = state.store.get(id).await?.ok_or_else(ApiError::article_not_found)?;
    Ok(Json(record))
}

/// `PUT /articles/{id}`
pub async fn update_article(
    State(state): State<AppState>, Path(id): Path<String>, body: JsonBody<UpdateArticleRequest>,
) -> Result<Json<ArticleRecord>, ApiError> {
    let id = parse_id(&id)?;
    let Json(update) = body?;

    let record = state
        .store
        .modify(id, move |record| {
            update.apply(record);
            record.clone()
        })
        .await?
        .ok_or_else(ApiError::article_not_found)?;

    tracing::info!(id = %id, "Article updated");
    Ok(Json(record))
}

/// `DELETE /articles/{id}`
pub async fn delete_article(
    State(state): State<AppState>, Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_id(&id)?;
    if !state.store.delete(id).await? {
        return Err(ApiError::article_not_found());
    }

    tracing::info!(id = %id, "Article deleted");
    Ok(Json(DeleteResponse { message: "Article deleted", id }))
}

/// `POST /articles/{id}/score`
///
/// Rescores the stored article with the given keywords and replaces its
/// score snapshot. The keywords stored on the record are left untouched.
pub async fn score_article(
    State(state): State<AppState>, Path(id): Path<String>, body: JsonBody<ScoreRequest>,
) -> Result<Json<ScoreReport>, ApiError> {
    let id = parse_id(&id)?;
    let Json(req) = body?;

    let report = state
        .store
        .modify(id, move |record| {
            let report = compute_seo_score(&record.article, &req.primary_keyword, &req.secondary_keywords);
            record.seo_score = Some(report.clone());
            record.touch();
            report
        })
        .await?
        .ok_or_else(ApiError::article_not_found)?;

    if report.needs_improvement() {
        tracing::warn!(id = %id, percentage = report.percentage, "Article needs improvement");
    } else {
        tracing::info!(id = %id, percentage = report.percentage, "Article scored");
    }
    Ok(Json(report))
}

/// `POST /score`
pub async fn score(body: JsonBody<ScoreArticleRequest>) -> Result<Json<ScoreReport>, ApiError> {
    let Json(req) = body?;
    Ok(Json(compute_seo_score(&req.article, &req.primary_keyword, &req.secondary_keywords)))
}

/// `GET /stats`
pub async fn stats(State(state): State<AppState>) -> Result<Json<ScoreStats>, ApiError> {
    let scores = state.store.scores().await?;
    Ok(Json(ScoreStats::from_reports(scores.iter().map(Option::as_ref))))
}
