use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::sync::Arc;

use crate::models::catalog::{Retreat, RetreatKey, RetreatTheme};
use crate::services::catalog_service::CatalogProvider;
use crate::services::experience_flow::ExperienceError;

#[derive(Debug, Serialize)]
pub struct RetreatListing<'a> {
    #[serde(flatten)]
    pub retreat: &'a Retreat,
    pub theme: &'a RetreatTheme,
}

fn listing(catalog: &dyn CatalogProvider, key: RetreatKey) -> RetreatListing<'_> {
    RetreatListing {
        retreat: catalog.get_package(key),
        theme: catalog.theme(key),
    }
}

/*
    /api/retreats
*/
pub async fn get_retreats(catalog: web::Data<Arc<dyn CatalogProvider>>) -> HttpResponse {
    let catalog: &dyn CatalogProvider = catalog.get_ref().as_ref();
    let retreats: Vec<RetreatListing> = RetreatKey::ALL
        .into_iter()
        .map(|key| listing(catalog, key))
        .collect();

    HttpResponse::Ok().json(retreats)
}

/*
    /api/retreats/{key}
*/
pub async fn get_retreat(
    path: web::Path<String>,
    catalog: web::Data<Arc<dyn CatalogProvider>>,
) -> Result<HttpResponse, ExperienceError> {
    let key: RetreatKey = path
        .into_inner()
        .parse()
        .map_err(ExperienceError::UnknownRetreat)?;
    let catalog: &dyn CatalogProvider = catalog.get_ref().as_ref();

    Ok(HttpResponse::Ok().json(listing(catalog, key)))
}

/*
    /api/addons
*/
pub async fn get_addons(catalog: web::Data<Arc<dyn CatalogProvider>>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.list_addons())
}
