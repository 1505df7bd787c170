//! HTTP handlers and route configuration.

mod categories;
mod comments;
mod health;
mod posts;
mod stats;
mod users;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Content routes
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts/{slug}", web::get().to(posts::get_post))
            .route("/categories", web::get().to(categories::list_categories))
            .route("/authors", web::get().to(users::list_authors))
            .route("/comments", web::get().to(comments::list_comments))
            .route("/comments", web::post().to(comments::create_comment))
            .route("/stats", web::get().to(stats::get_stats)),
    );
}
