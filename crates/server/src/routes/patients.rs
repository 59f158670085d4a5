use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use common::types::Message;
use service::patient::domain::{PatientCreate, PatientRead, PatientUpdate};

use crate::errors::JsonApiError;
use super::ServerState;

#[utoipa::path(
    get, path = "/patients/", tag = "patients", operation_id = "list_patients",
    responses(
        (status = 200, description = "All patients", body = [crate::openapi::PatientReadDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PatientRead>>, JsonApiError> {
    let list = state.patients.list().await?;
    info!(count = list.len(), "list patients");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/patients/", tag = "patients", operation_id = "create_patient",
    request_body = crate::openapi::PatientCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PatientReadDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<PatientCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<PatientRead>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.patients.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/patients/{id}", tag = "patients", operation_id = "get_patient",
    params(("id" = i32, Path, description = "Patient id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PatientReadDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<PatientRead>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.patients.get(id).await?))
}

#[utoipa::path(
    put, path = "/patients/{id}", tag = "patients", operation_id = "update_patient",
    params(("id" = i32, Path, description = "Patient id")),
    request_body = crate::openapi::PatientCreateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PatientReadDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PatientUpdate>, JsonRejection>,
) -> Result<Json<PatientRead>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.patients.replace(id, &input).await?))
}

#[utoipa::path(
    delete, path = "/patients/{id}", tag = "patients", operation_id = "delete_patient",
    params(("id" = i32, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(id) = id?;
    state.patients.delete(id).await?;
    Ok(Json(Message::new("Patient deleted successfully")))
}
