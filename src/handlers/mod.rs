pub mod employee;
pub mod health;

use actix_web::web;
use std::sync::Arc;

use crate::errors::ApiError;
use crate::repository::EmployeeStore;

/// Shared handler state: the single long-lived store handle, injected at
/// startup instead of living in a global.
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
}

/// Registers the route table and the JSON decode error handler. Used by the
/// server and by the handler tests so both run the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|_, _| ApiError::BadRequest("invalid request payload".to_string()).into()),
    )
    .service(web::resource("/health").route(web::get().to(health::health)))
    .service(
        web::resource("/employee")
            .route(web::get().to(employee::get_all_employees))
            .route(web::post().to(employee::create_employee))
            .route(web::delete().to(employee::delete_all_employees)),
    )
    .service(
        web::resource("/employee/{id}")
            .route(web::get().to(employee::get_employee_by_id))
            .route(web::put().to(employee::update_employee_by_id))
            .route(web::delete().to(employee::delete_employee_by_id)),
    );
}
