//! Comment listing and submission endpoints.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use gazette_core::domain::NewComment;
use gazette_core::text::is_valid_email;
use gazette_shared::ApiResponse;
use gazette_shared::dto::CreateCommentRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListParams {
    #[serde(default)]
    pub post_id: Option<Uuid>,
}

/// Comments on one post, oldest first.
///
/// GET /api/comments?postId={id}
pub async fn list_comments(
    state: web::Data<AppState>,
    params: web::Query<CommentListParams>,
) -> AppResult<HttpResponse> {
    let post_id = params.post_id.ok_or_else(|| {
        AppError::BadRequest("the postId query parameter is required".to_string())
    })?;

    let comments = state.comments.for_post(post_id).await;
    let message = format!("retrieved {} comments", comments.len());
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(comments, message)))
}

/// Submit a comment. Field presence and the email shape are checked
/// before the store is touched; the referenced post is not required to
/// exist.
///
/// POST /api/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();

    let content = request.content.filter(|s| !s.is_empty());
    let author_name = request.author_name.filter(|s| !s.is_empty());
    let author_email = request.author_email.filter(|s| !s.is_empty());
    let (Some(content), Some(author_name), Some(author_email), Some(post_id)) =
        (content, author_name, author_email, request.post_id)
    else {
        return Err(AppError::Validation(
            "content, authorName, authorEmail and postId are required".to_string(),
        ));
    };

    if !is_valid_email(&author_email) {
        return Err(AppError::Validation(
            "authorEmail must be a valid email address".to_string(),
        ));
    }

    let comment = state
        .comments
        .create(NewComment {
            content,
            author_name,
            author_email,
            post_id,
            parent_id: request.parent_id,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(comment, "comment submitted")))
}
