use actix_cors::Cors;
use actix_web::web;

use crate::config::AppConfig;

pub mod catalog;
pub mod experience;
pub mod health;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(|| async { "OK" }))
        .route("/health/details", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/retreats", web::get().to(catalog::get_retreats))
                .route("/retreats/{key}", web::get().to(catalog::get_retreat))
                .route("/addons", web::get().to(catalog::get_addons))
                .service(
                    web::scope("/experiences")
                        .route("", web::post().to(experience::create))
                        .route("/{id}", web::get().to(experience::get_by_id))
                        .route("/{id}", web::delete().to(experience::close))
                        .route("/{id}/open", web::post().to(experience::reopen))
                        .route("/{id}/retreat", web::put().to(experience::change_retreat))
                        .route("/{id}/intents", web::post().to(experience::apply_intent))
                        .route("/{id}/reference", web::post().to(experience::copy_reference)),
                ),
        );
}

pub fn cors(config: &AppConfig) -> Cors {
    let cors = match &config.cors_allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };

    cors.allow_any_method().allow_any_header().max_age(3600)
}
