use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{
    ApplicantId, ApplicantInput, ApplicantView, BestApplicant, DeleteAcknowledgement,
    ListApplicantsRequest, ListApplicantsResponse,
};
use super::repository::ApplicantRepository;
use super::service::{ApplicantService, ApplicantServiceError, ErrorCode};

/// Single-applicant response body shared by create, get, and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantEnvelope {
    pub applicant: ApplicantView,
}

/// JSON gateway over the applicant service.
pub fn applicant_router<R>(service: Arc<ApplicantService<R>>) -> Router
where
    R: ApplicantRepository + 'static,
{
    Router::new()
        .route(
            "/v1/applicants",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route("/v1/applicants/best", get(best_handler::<R>))
        .route(
            "/v1/applicants/:id",
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<ApplicantService<R>>>,
    input: Result<Json<ApplicantInput>, JsonRejection>,
) -> Result<Json<ApplicantEnvelope>, ApplicantServiceError>
where
    R: ApplicantRepository + 'static,
{
    let Json(input) = input?;
    let applicant = service.create(&input)?;
    Ok(Json(ApplicantEnvelope { applicant }))
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<ApplicantService<R>>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApplicantEnvelope>, ApplicantServiceError>
where
    R: ApplicantRepository + 'static,
{
    let Path(id) = id?;
    let applicant = service.get(ApplicantId(id))?;
    Ok(Json(ApplicantEnvelope { applicant }))
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<ApplicantService<R>>>,
    id: Result<Path<i64>, PathRejection>,
    input: Result<Json<ApplicantInput>, JsonRejection>,
) -> Result<Json<ApplicantEnvelope>, ApplicantServiceError>
where
    R: ApplicantRepository + 'static,
{
    let Path(id) = id?;
    let Json(input) = input?;
    let applicant = service.update(ApplicantId(id), &input)?;
    Ok(Json(ApplicantEnvelope { applicant }))
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<ApplicantService<R>>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteAcknowledgement>, ApplicantServiceError>
where
    R: ApplicantRepository + 'static,
{
    let Path(id) = id?;
    service.delete(ApplicantId(id)).map(Json)
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<ApplicantService<R>>>,
    request: Result<Query<ListApplicantsRequest>, QueryRejection>,
) -> Result<Json<ListApplicantsResponse>, ApplicantServiceError>
where
    R: ApplicantRepository + 'static,
{
    let Query(request) = request?;
    service.list(&request).map(Json)
}

pub(crate) async fn best_handler<R>(
    State(service): State<Arc<ApplicantService<R>>>,
) -> Result<Json<BestApplicant>, ApplicantServiceError>
where
    R: ApplicantRepository + 'static,
{
    service.get_best().map(Json)
}

impl From<JsonRejection> for ApplicantServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ApplicantServiceError::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApplicantServiceError {
    fn from(rejection: PathRejection) -> Self {
        ApplicantServiceError::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApplicantServiceError {
    fn from(rejection: QueryRejection) -> Self {
        ApplicantServiceError::MalformedRequest(rejection.body_text())
    }
}

impl ErrorCode {
    pub const fn http_status(self) -> StatusCode {
        match self {
            ErrorCode::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::AlreadyExists => StatusCode::CONFLICT,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicantServiceError {
    fn into_response(self) -> Response {
        let code = self.code();
        let payload = json!({
            "code": code.as_str(),
            "message": self.to_string(),
        });
        (code.http_status(), Json(payload)).into_response()
    }
}
