//! Generic CRUD handlers shared by every record collection.
//!
//! Malformed path IDs and bodies are rejected here with 400 and never
//! reach the store.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use crate::application::ManageRecordsUseCase;
use crate::domain::{Record, RecordId};

pub async fn list_records<R: Record>(
    State(use_case): State<ManageRecordsUseCase<R>>,
) -> Json<Vec<R>> {
    Json(use_case.list().await)
}

pub async fn create_record<R: Record>(
    State(use_case): State<ManageRecordsUseCase<R>>,
    payload: Result<Json<R>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), ApiError> {
    let record = body(payload)?;
    let created = use_case.create(record).await;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_record<R: Record>(
    State(use_case): State<ManageRecordsUseCase<R>>,
    id: Result<Path<RecordId>, PathRejection>,
) -> Result<Json<R>, ApiError> {
    let id = path_id::<R>(id)?;
    Ok(Json(use_case.get(id).await?))
}

pub async fn update_record<R: Record>(
    State(use_case): State<ManageRecordsUseCase<R>>,
    id: Result<Path<RecordId>, PathRejection>,
    payload: Result<Json<R>, JsonRejection>,
) -> Result<Json<R>, ApiError> {
    let id = path_id::<R>(id)?;
    let record = body(payload)?;
    if record.id() != id {
        return Err(ApiError::bad_request("ID in body does not match ID in URL"));
    }
    Ok(Json(use_case.update(record).await?))
}

pub async fn delete_record<R: Record>(
    State(use_case): State<ManageRecordsUseCase<R>>,
    id: Result<Path<RecordId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id::<R>(id)?;
    use_case.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn path_id<R: Record>(id: Result<Path<RecordId>, PathRejection>) -> Result<RecordId, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|_| ApiError::bad_request(format!("Invalid {} ID", R::KIND)))
}

fn body<R: Record>(payload: Result<Json<R>, JsonRejection>) -> Result<R, ApiError> {
    payload
        .map(|Json(record)| record)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}
