use actix_web::{web, HttpResponse};
use log::error;
use serde_json::json;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::handlers::AppState;
use crate::models::employee::Employee;
use crate::repository::RepoError;
use crate::utils::validation::validate_employee;

fn store_error(err: RepoError) -> ApiError {
    match err {
        RepoError::NotFound(msg) => ApiError::NotFound(msg),
        RepoError::Store(msg) => ApiError::Database(msg),
    }
}

/// POST /employee. The id is always server-assigned; anything the client
/// sends in `employee_id` is discarded.
pub async fn create_employee(
    state: web::Data<AppState>,
    payload: web::Json<Employee>,
) -> Result<HttpResponse, ApiError> {
    let mut emp = payload.into_inner();
    emp.employee_id = Uuid::new_v4().to_string();

    validate_employee(&emp).map_err(|msg| ApiError::BadRequest(msg.to_string()))?;

    let inserted_id = state.store.insert(&emp).await.map_err(|err| {
        error!("insert failed: {err}");
        store_error(err)
    })?;

    Ok(HttpResponse::Created().json(json!({
        "data": { "inserted_id": inserted_id, "employee_id": emp.employee_id }
    })))
}

/// GET /employee/{id}.
pub async fn get_employee_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    if employee_id.is_empty() {
        return Err(ApiError::BadRequest("employee id is required".to_string()));
    }

    let emp = state
        .store
        .find_by_id(&employee_id)
        .await
        .map_err(store_error)?;

    Ok(HttpResponse::Ok().json(json!({ "data": emp })))
}

/// GET /employee.
pub async fn get_all_employees(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let emps = state.store.find_all().await.map_err(|err| {
        error!("find all failed: {err}");
        store_error(err)
    })?;

    Ok(HttpResponse::Ok().json(json!({ "data": emps })))
}

/// PUT /employee/{id}. An unmatched id is not an error; the caller sees a
/// zero modified count.
pub async fn update_employee_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<Employee>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    if employee_id.is_empty() {
        return Err(ApiError::BadRequest("employee id is required".to_string()));
    }

    let emp = payload.into_inner();
    validate_employee(&emp).map_err(|msg| ApiError::BadRequest(msg.to_string()))?;

    let modified_count = state
        .store
        .update_by_id(&employee_id, &emp)
        .await
        .map_err(|err| {
            error!("update failed: {err}");
            store_error(err)
        })?;

    Ok(HttpResponse::Ok().json(json!({ "data": { "modified_count": modified_count } })))
}

/// DELETE /employee/{id}.
pub async fn delete_employee_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    if employee_id.is_empty() {
        return Err(ApiError::BadRequest("employee id is required".to_string()));
    }

    let deleted_count = state
        .store
        .delete_by_id(&employee_id)
        .await
        .map_err(|err| {
            error!("delete failed: {err}");
            store_error(err)
        })?;

    Ok(HttpResponse::Ok().json(json!({ "data": { "deleted_count": deleted_count } })))
}

/// DELETE /employee.
pub async fn delete_all_employees(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let deleted_count = state.store.delete_all().await.map_err(|err| {
        error!("delete all failed: {err}");
        store_error(err)
    })?;

    Ok(HttpResponse::Ok().json(json!({ "data": { "deleted_count": deleted_count } })))
}
