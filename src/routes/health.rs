use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::db::session_store::SessionStore;
use crate::services::catalog_service::CatalogProvider;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(
    store: web::Data<Arc<SessionStore>>,
    catalog: web::Data<Arc<dyn CatalogProvider>>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    health.services.insert(
        "session_store".to_string(),
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(if store.is_empty() {
                "No experiences in memory".to_string()
            } else {
                format!("{} experiences in memory", store.len())
            }),
        },
    );

    let catalog_result = check_catalog(catalog.get_ref().as_ref());
    health
        .services
        .insert("catalog".to_string(), catalog_result.clone());

    if catalog_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_catalog(catalog: &dyn CatalogProvider) -> ServiceStatus {
    let packages = catalog.list_packages();
    if packages.is_empty() || catalog.list_addons().is_empty() {
        return ServiceStatus {
            status: "error".to_string(),
            details: Some("Catalog has no packages or add-ons".to_string()),
        };
    }

    ServiceStatus {
        status: "ok".to_string(),
        details: Some(format!(
            "{} retreats, {} add-ons",
            packages.len(),
            catalog.list_addons().len()
        )),
    }
}
