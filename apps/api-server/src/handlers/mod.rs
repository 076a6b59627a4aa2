//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Largest accepted JSON body. Post content is otherwise unbounded.
pub const MAX_JSON_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(json_error_handler);

    cfg.app_data(json_config)
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/posts")
                        .service(
                            web::resource("")
                                .route(web::get().to(posts::list_posts))
                                .route(web::post().to(posts::create_post)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(posts::get_post))
                                .route(web::put().to(posts::update_post))
                                .route(web::delete().to(posts::delete_post)),
                        ),
                ),
        );
}
