use actix_web::{web, App};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use retreat_booking_api::config::AppConfig;
use retreat_booking_api::db::session_store::SessionStore;
use retreat_booking_api::routes;
use retreat_booking_api::services::catalog_service::{CatalogProvider, DemoCatalog};
use retreat_booking_api::services::notification_service::{Notifier, Toast};

/// Keeps every toast so tests can assert on them.
#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: Mutex<Vec<Toast>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: &Toast) {
        self.toasts.lock().unwrap().push(toast.clone());
    }
}

impl RecordingNotifier {
    pub fn titles(&self) -> Vec<String> {
        self.toasts
            .lock()
            .unwrap()
            .iter()
            .map(|toast| toast.title.clone())
            .collect()
    }
}

pub struct TestApp {
    pub store: Arc<SessionStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub config: AppConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_close_delay(Duration::from_millis(800))
    }

    pub fn with_close_delay(delay: Duration) -> Self {
        Self {
            store: Arc::new(SessionStore::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            config: AppConfig {
                finish_close_delay: delay,
                ..AppConfig::default()
            },
        }
    }

    pub fn with_store(store: SessionStore) -> Self {
        Self {
            store: Arc::new(store),
            ..Self::new()
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let catalog: Arc<dyn CatalogProvider> = Arc::new(DemoCatalog);
        let notifier: Arc<dyn Notifier> = self.notifier.clone();

        App::new()
            .app_data(web::Data::new(self.store.clone()))
            .app_data(web::Data::new(catalog))
            .app_data(web::Data::new(notifier))
            .app_data(web::Data::new(self.config.clone()))
            .configure(routes::configure)
    }
}

pub fn step_name(body: &serde_json::Value) -> String {
    body["view"]["step"].as_str().unwrap_or_default().to_string()
}
