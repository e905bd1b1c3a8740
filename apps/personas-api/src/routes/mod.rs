//! API routes

pub mod person;

use axum::Router;
use personas_domain::PersonRepository;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::person::{ErrorResponse, MessageResponse, PersonDto},
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::person::create_person,
        handlers::person::list_people,
        handlers::person::get_person,
        handlers::person::update_person,
        handlers::person::delete_person,
        health_handler
    ),
    components(
        schemas(PersonDto, MessageResponse, ErrorResponse)
    ),
    tags(
        (name = "people", description = "Person record endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Personas API",
        version = "0.1.0",
        description = "CRUD microservice for person records stored in MongoDB"
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: PersonRepository + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(person::routes())
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
