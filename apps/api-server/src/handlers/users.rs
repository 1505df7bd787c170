//! Author listing endpoint.

use actix_web::{HttpResponse, web};

use gazette_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Every author profile, in store order.
///
/// GET /api/authors
pub async fn list_authors(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors = state.users.all().await;
    let message = format!("retrieved {} authors", authors.len());
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(authors, message)))
}
