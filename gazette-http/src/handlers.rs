use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use serde::Deserialize;

use gazette_core::{Comment, NewsDetail, NewsItem};
use gazette_types::{CommentId, NewsId};

use crate::AppState;
use crate::error::ApiFailure;

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn home_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<NewsItem>>, ApiFailure> {
    Ok(Json(state.gazette.home_page().await?))
}

pub(crate) async fn detail_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<NewsDetail>, ApiFailure> {
    let caller = state.resolver.resolve(&headers);
    let detail = state.gazette.news_detail(NewsId::new(id), &caller).await?;
    Ok(Json(detail))
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentBody {
    text: String,
}

pub(crate) async fn submit_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<CommentBody>,
) -> Result<(StatusCode, Json<Comment>), ApiFailure> {
    let caller = state.resolver.resolve(&headers);
    let comment = state
        .gazette
        .submit_comment(NewsId::new(id), &caller, &body.text)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub(crate) async fn edit_comment_handler(
    State(state): State<AppState>,
    Path((id, cid)): Path<(i64, i64)>,
    headers: HeaderMap,
    Json(body): Json<CommentBody>,
) -> Result<Json<Comment>, ApiFailure> {
    let caller = state.resolver.resolve(&headers);
    let comment = state
        .gazette
        .edit_comment(NewsId::new(id), CommentId::new(cid), &caller, &body.text)
        .await?;
    Ok(Json(comment))
}

pub(crate) async fn delete_comment_handler(
    State(state): State<AppState>,
    Path((id, cid)): Path<(i64, i64)>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiFailure> {
    let caller = state.resolver.resolve(&headers);
    state
        .gazette
        .delete_comment(NewsId::new(id), CommentId::new(cid), &caller)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
