//! Person CRUD handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{error, info};

use personas_domain::{PersonError, PersonRepository};

use crate::dto::person::{ErrorResponse, MessageResponse, PersonDto};
use crate::AppState;

/// Handle person creation requests
#[utoipa::path(
    post,
    path = "/people",
    request_body = PersonDto,
    responses(
        (status = 201, description = "Person created", body = MessageResponse),
        (status = 400, description = "Validation failed or document already taken", body = ErrorResponse)
    ),
    tag = "people"
)]
pub async fn create_person<R: PersonRepository>(
    State(state): State<AppState<R>>,
    Json(payload): Json<PersonDto>,
) -> impl IntoResponse {
    info!(document = %payload.document, "Received create request");

    match state.person_service.create(payload.into()).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "created".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "Failed to create person");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Handle person listing requests
#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All person records", body = [PersonDto]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "people"
)]
pub async fn list_people<R: PersonRepository>(
    State(state): State<AppState<R>>,
) -> impl IntoResponse {
    match state.person_service.list().await {
        Ok(people) => {
            let people: Vec<PersonDto> = people.into_iter().map(PersonDto::from).collect();
            (StatusCode::OK, Json(people)).into_response()
        }
        Err(err) => {
            error!(error = %err, "Failed to list people");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Handle person lookup requests
#[utoipa::path(
    get,
    path = "/people/{document}",
    params(
        ("document" = String, Path, description = "Business document of the person")
    ),
    responses(
        (status = 200, description = "Person found", body = PersonDto),
        (status = 404, description = "No person matches the document", body = ErrorResponse)
    ),
    tag = "people"
)]
pub async fn get_person<R: PersonRepository>(
    State(state): State<AppState<R>>,
    Path(document): Path<String>,
) -> impl IntoResponse {
    match state.person_service.get_by_document(&document).await {
        Ok(person) => (StatusCode::OK, Json(PersonDto::from(person))).into_response(),
        Err(err) => {
            error!(document = %document, error = %err, "Failed to look up person");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Handle person update requests
#[utoipa::path(
    put,
    path = "/people/{document}",
    params(
        ("document" = String, Path, description = "Business document of the person")
    ),
    request_body = PersonDto,
    responses(
        (status = 200, description = "Person updated", body = MessageResponse),
        (status = 400, description = "Validation failed or document changed", body = ErrorResponse),
        (status = 404, description = "No person matches the document", body = ErrorResponse)
    ),
    tag = "people"
)]
pub async fn update_person<R: PersonRepository>(
    State(state): State<AppState<R>>,
    Path(document): Path<String>,
    Json(payload): Json<PersonDto>,
) -> impl IntoResponse {
    info!(document = %document, "Received update request");

    match state.person_service.update(&document, payload.into()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "updated".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            error!(document = %document, error = %err, "Failed to update person");
            let status = match err {
                PersonError::NotFound => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_REQUEST,
            };
            (
                status,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Handle person deletion requests
#[utoipa::path(
    delete,
    path = "/people/{document}",
    params(
        ("document" = String, Path, description = "Business document of the person")
    ),
    responses(
        (status = 200, description = "Person deleted", body = MessageResponse),
        (status = 400, description = "Deletion failed", body = ErrorResponse)
    ),
    tag = "people"
)]
pub async fn delete_person<R: PersonRepository>(
    State(state): State<AppState<R>>,
    Path(document): Path<String>,
) -> impl IntoResponse {
    info!(document = %document, "Received delete request");

    match state.person_service.delete(&document).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "deleted".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            error!(document = %document, error = %err, "Failed to delete person");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
