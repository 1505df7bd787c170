//! Category listing endpoint.

use actix_web::{HttpResponse, web};

use gazette_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Every category, in store order.
///
/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.categories.all().await;
    let message = format!("retrieved {} categories", categories.len());
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(categories, message)))
}
