use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use common::types::Message;
use service::doctor::domain::{DoctorCreate, DoctorRead, DoctorUpdate};

use crate::errors::JsonApiError;
use super::ServerState;

#[utoipa::path(
    get, path = "/doctors/", tag = "doctors", operation_id = "list_doctors",
    responses(
        (status = 200, description = "All doctors", body = [crate::openapi::DoctorReadDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<DoctorRead>>, JsonApiError> {
    let list = state.doctors.list().await?;
    info!(count = list.len(), "list doctors");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/doctors/", tag = "doctors", operation_id = "create_doctor",
    request_body = crate::openapi::DoctorCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::DoctorReadDoc),
        (status = 409, description = "Email already registered", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<DoctorCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<DoctorRead>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.doctors.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/doctors/{id}", tag = "doctors", operation_id = "get_doctor",
    params(("id" = i32, Path, description = "Doctor id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::DoctorReadDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DoctorRead>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.doctors.get(id).await?))
}

#[utoipa::path(
    put, path = "/doctors/{id}", tag = "doctors", operation_id = "update_doctor",
    params(("id" = i32, Path, description = "Doctor id")),
    request_body = crate::openapi::DoctorCreateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::DoctorReadDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already registered", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<DoctorUpdate>, JsonRejection>,
) -> Result<Json<DoctorRead>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.doctors.replace(id, &input).await?))
}

#[utoipa::path(
    delete, path = "/doctors/{id}", tag = "doctors", operation_id = "delete_doctor",
    params(("id" = i32, Path, description = "Doctor id")),
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
    state.doctors.delete(id).await?;
    Ok(Json(Message::new("Doctor deleted successfully")))
}
