pub mod catalog_service;
pub mod experience_flow;
pub mod notification_service;
pub mod pricing_service;
pub mod session_service;
pub mod step_service;
pub mod summary_service;
