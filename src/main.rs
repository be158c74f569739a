use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use retreat_booking_api::config::AppConfig;
use retreat_booking_api::db::session_store::{create_session_store, spawn_sweeper};
use retreat_booking_api::routes;
use retreat_booking_api::services::catalog_service::{CatalogProvider, DemoCatalog};
use retreat_booking_api::services::notification_service::{LogNotifier, Notifier};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = AppConfig::from_env();
    if !cfg!(debug_assertions) {
        log::info!("Release mode");
    }

    let store = create_session_store(&config);
    spawn_sweeper(store.clone());
    let catalog: Arc<dyn CatalogProvider> = Arc::new(DemoCatalog);
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);

    let bind = (config.host.clone(), config.port);
    log::info!("Attempting to bind to {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors(&config))
            .wrap(Logger::default())
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(notifier.clone()))
            .app_data(web::Data::new(config.clone()))
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
