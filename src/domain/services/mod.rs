//! Domain services

pub mod dependency_locator;
pub mod service_worker;

pub use dependency_locator::find_dependency_file;
pub use service_worker::{render_service_worker, SENDER_ID_TOKEN, SERVICE_WORKER_TEMPLATE};
