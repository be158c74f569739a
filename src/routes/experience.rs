use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::db::session_store::SessionStore;
use crate::models::catalog::RetreatKey;
use crate::models::intent::WizardIntent;
use crate::models::session::WizardStep;
use crate::models::view::WizardView;
use crate::services::catalog_service::CatalogProvider;
use crate::services::experience_flow::{ExperienceError, ExperienceFlow, IntentOutcome};
use crate::services::notification_service::{generate_reference, Notifier, Toast};

impl ResponseError for ExperienceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExperienceError::FlowNotFound(_) | ExperienceError::UnknownRetreat(_) => {
                StatusCode::NOT_FOUND
            }
            ExperienceError::FlowClosed | ExperienceError::NotAtReview => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[derive(Debug, Deserialize)]
pub struct RetreatSelection {
    pub retreat: String,
}

impl RetreatSelection {
    fn key(&self) -> Result<RetreatKey, ExperienceError> {
        self.retreat
            .parse()
            .map_err(ExperienceError::UnknownRetreat)
    }
}

#[derive(Debug, Serialize)]
pub struct ExperienceResponse {
    pub id: Uuid,
    pub open: bool,
    pub retreat: RetreatKey,
    pub view: Option<WizardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast: Option<Toast>,
}

#[derive(Debug, Serialize)]
pub struct ReferenceResponse {
    pub reference: String,
    pub toast: Toast,
}

type Catalog = web::Data<Arc<dyn CatalogProvider>>;
type Store = web::Data<Arc<SessionStore>>;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn respond(
    id: Uuid,
    flow: &ExperienceFlow,
    catalog: &dyn CatalogProvider,
) -> Result<ExperienceResponse, ExperienceError> {
    let view = if flow.is_open() {
        Some(flow.view(catalog)?)
    } else {
        None
    };

    Ok(ExperienceResponse {
        id,
        open: flow.is_open(),
        retreat: flow.retreat(),
        view,
        toast: None,
    })
}

/// Closes the flow after `delay`, but only if it still holds the session
/// that finished. A close or reopen in the meantime disarms it.
fn schedule_close(store: Arc<SessionStore>, id: Uuid, generation: u64, delay: Duration) {
    actix_web::rt::spawn(async move {
        tokio::time::sleep(delay).await;
        if store.close_if(&id, generation) {
            log::info!("Experience {} closed after finish", id);
        }
    });
}

/*
    POST /api/experiences
*/
pub async fn create(
    store: Store,
    catalog: Catalog,
    input: web::Json<RetreatSelection>,
) -> Result<HttpResponse, ExperienceError> {
    let retreat = input.key()?;
    let catalog: &dyn CatalogProvider = catalog.get_ref().as_ref();

    let mut flow = ExperienceFlow::new(retreat);
    flow.open(retreat, today(), catalog);
    let view = flow.view(catalog)?;
    let id = store.insert(flow);

    log::info!("Opened experience {} for {}", id, retreat);

    Ok(HttpResponse::Created().json(ExperienceResponse {
        id,
        open: true,
        retreat,
        view: Some(view),
        toast: None,
    }))
}

/*
    GET /api/experiences/{id}
*/
pub async fn get_by_id(
    path: web::Path<Uuid>,
    store: Store,
    catalog: Catalog,
) -> Result<HttpResponse, ExperienceError> {
    let id = path.into_inner();
    let catalog: &dyn CatalogProvider = catalog.get_ref().as_ref();

    let response = store.with_flow(&id, |flow| {
        if !flow.is_open() {
            return Err(ExperienceError::FlowClosed);
        }
        respond(id, flow, catalog)
    })?;
    Ok(HttpResponse::Ok().json(response))
}

/*
    POST /api/experiences/{id}/open
*/
pub async fn reopen(
    path: web::Path<Uuid>,
    store: Store,
    catalog: Catalog,
    input: web::Json<RetreatSelection>,
) -> Result<HttpResponse, ExperienceError> {
    let id = path.into_inner();
    let retreat = input.key()?;
    let catalog: &dyn CatalogProvider = catalog.get_ref().as_ref();

    let response = store.with_flow(&id, |flow| {
        flow.open(retreat, today(), catalog);
        respond(id, flow, catalog)
    })?;

    log::info!("Reopened experience {} for {}", id, retreat);
    Ok(HttpResponse::Ok().json(response))
}

/*
    PUT /api/experiences/{id}/retreat
*/
pub async fn change_retreat(
    path: web::Path<Uuid>,
    store: Store,
    catalog: Catalog,
    input: web::Json<RetreatSelection>,
) -> Result<HttpResponse, ExperienceError> {
    let id = path.into_inner();
    let retreat = input.key()?;
    let catalog: &dyn CatalogProvider = catalog.get_ref().as_ref();

    let response = store.with_flow(&id, |flow| {
        flow.change_retreat(retreat, today(), catalog);
        respond(id, flow, catalog)
    })?;

    Ok(HttpResponse::Ok().json(response))
}

/*
    POST /api/experiences/{id}/intents
*/
pub async fn apply_intent(
    path: web::Path<Uuid>,
    store: Store,
    catalog: Catalog,
    notifier: web::Data<Arc<dyn Notifier>>,
    config: web::Data<AppConfig>,
    input: web::Json<WizardIntent>,
) -> Result<HttpResponse, ExperienceError> {
    let id = path.into_inner();
    let intent = input.into_inner();
    let catalog: &dyn CatalogProvider = catalog.get_ref().as_ref();

    let (outcome, mut response) = store.with_flow(&id, |flow| {
        let outcome = flow.apply(intent)?;
        Ok((outcome, respond(id, flow, catalog)?))
    })?;

    if let IntentOutcome::Finished { toast, generation } = outcome {
        log::info!("Experience {} finished", id);
        notifier.notify(&toast);
        schedule_close(
            store.get_ref().clone(),
            id,
            generation,
            config.finish_close_delay,
        );
        response.toast = Some(toast);
    }

    Ok(HttpResponse::Ok().json(response))
}

/*
    POST /api/experiences/{id}/reference
*/
pub async fn copy_reference(
    path: web::Path<Uuid>,
    store: Store,
    notifier: web::Data<Arc<dyn Notifier>>,
) -> Result<HttpResponse, ExperienceError> {
    let id = path.into_inner();

    store.with_flow(&id, |flow| {
        let session = flow.session().ok_or(ExperienceError::FlowClosed)?;
        if session.current_step() == WizardStep::Review {
            Ok(())
        } else {
            Err(ExperienceError::NotAtReview)
        }
    })?;

    let toast = Toast::reference_copied();
    notifier.notify(&toast);

    Ok(HttpResponse::Ok().json(ReferenceResponse {
        reference: generate_reference(),
        toast,
    }))
}

/*
    DELETE /api/experiences/{id}
*/
pub async fn close(
    path: web::Path<Uuid>,
    store: Store,
    catalog: Catalog,
) -> Result<HttpResponse, ExperienceError> {
    let id = path.into_inner();
    let catalog: &dyn CatalogProvider = catalog.get_ref().as_ref();

    let response = store.with_flow(&id, |flow| {
        flow.close();
        respond(id, flow, catalog)
    })?;

    Ok(HttpResponse::Ok().json(response))
}
