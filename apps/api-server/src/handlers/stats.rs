//! Site stats endpoint.

use actix_web::{HttpResponse, web};

use gazette_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Site-wide counters plus popular and recent samples, computed fresh
/// on every request.
///
/// GET /api/stats
pub async fn get_stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let stats = state.stats.stats().await;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(stats, "retrieved site stats")))
}
