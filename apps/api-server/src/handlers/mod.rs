//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/users")
                        .route("", web::post().to(users::create_user))
                        .route("", web::get().to(users::list_users))
                        .route("/{user_id}", web::get().to(users::get_user))
                        .route("/{user_id}", web::put().to(users::update_user))
                        .route("/{user_id}", web::delete().to(users::delete_user)),
                )
                .service(
                    web::scope("/posts")
                        .route("", web::post().to(posts::create_post))
                        .route("", web::get().to(posts::list_posts))
                        .route("/{post_id}", web::get().to(posts::get_post))
                        .route("/{post_id}", web::put().to(posts::update_post))
                        .route("/{post_id}", web::delete().to(posts::delete_post)),
                ),
        );
}
