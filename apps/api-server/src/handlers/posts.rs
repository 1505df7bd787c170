//! Post listing and single-post endpoints.

use actix_web::{HttpResponse, web};

use gazette_core::page::paginate;
use gazette_shared::ApiResponse;
use gazette_shared::dto::PostListParams;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Published posts, filtered, sorted and paginated per query parameters,
/// with the full facet universe reported alongside.
///
/// GET /api/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    params: web::Query<PostListParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(10);

    let matched = state.posts.query(&params.into_query()).await;
    let window = paginate(matched, page, limit);
    let facets = state.posts.facets().await;

    let message = format!("retrieved {} posts", window.pagination.total);
    Ok(HttpResponse::Ok().json(
        ApiResponse::ok_with_message(window.data, message)
            .with_pagination(window.pagination)
            .with_filters(facets),
    ))
}

/// Public single-post fetch by slug. Bumps the view count; missing and
/// unpublished posts are reported as the same 404 so drafts stay
/// invisible.
///
/// GET /api/posts/{slug}
pub async fn get_post(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = slug.into_inner();

    let view = state
        .posts
        .fetch_for_display(&slug)
        .await
        .filter(|view| view.post.published)
        .ok_or_else(|| AppError::NotFound(format!("no post with slug '{}'", slug)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(view, "retrieved post")))
}
