use std::sync::Arc;

use tracing::{debug, error, info};

use super::domain::{
    ApplicantFilter, ApplicantId, ApplicantInput, ApplicantView, BestApplicant,
    DeleteAcknowledgement, ListApplicantsParams, ListApplicantsRequest, ListApplicantsResponse,
    NewApplicant,
};
use super::repository::{ApplicantRepository, RepositoryError};
use super::scoring::{calculate_overall_score, ScoreInputs};
use super::validation::{ensure_positive_id, validate_applicant, ValidationError, ValidationMode};

pub const DEFAULT_PAGE_LIMIT: i32 = 10;
pub const MAX_PAGE_LIMIT: i32 = 100;

const BEST_APPLICANT_ACCOLADE: &str = "Danish excellence, impeccable Go skills, can center a div \
without Stack Overflow, and possesses the rare ability to write self-documenting code. \
Also has minor time travel capabilities.";

/// Service composing validation, scoring, and the applicant repository.
pub struct ApplicantService<R> {
    repository: Arc<R>,
}

impl<R> ApplicantService<R>
where
    R: ApplicantRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate, score, and persist a new applicant.
    pub fn create(&self, input: &ApplicantInput) -> Result<ApplicantView, ApplicantServiceError> {
        if let Err(err) = validate_applicant(input, ValidationMode::Create) {
            debug!(error = %err, "validation failed");
            return Err(err.into());
        }

        debug!(email = %input.email, "creating applicant");

        let overall_score = calculate_overall_score(&ScoreInputs::from(input));
        let record = self
            .repository
            .create(NewApplicant::from_input(input, overall_score))
            .map_err(|err| write_failure("create applicant", &input.email, err))?;

        info!(
            name = %record.name,
            overall_score,
            status = record.status,
            "applicant created with calculated score"
        );

        Ok(record.to_view())
    }

    pub fn get(&self, id: ApplicantId) -> Result<ApplicantView, ApplicantServiceError> {
        ensure_positive_id(id)?;

        debug!(id = id.0, "getting applicant");

        match self.repository.get_by_id(id) {
            Ok(Some(record)) => Ok(record.to_view()),
            Ok(None) => Err(ApplicantServiceError::NotFound { id: id.0 }),
            Err(source) => {
                error!(id = id.0, error = %source, "failed to get applicant");
                Err(ApplicantServiceError::Internal {
                    operation: "get applicant",
                    source,
                })
            }
        }
    }

    /// Replace every field of an existing applicant and recompute the overall score.
    pub fn update(
        &self,
        id: ApplicantId,
        input: &ApplicantInput,
    ) -> Result<ApplicantView, ApplicantServiceError> {
        if let Err(err) = validate_applicant(input, ValidationMode::Update(id)) {
            debug!(error = %err, "validation failed");
            return Err(err.into());
        }

        debug!(id = id.0, "updating applicant");

        let overall_score = calculate_overall_score(&ScoreInputs::from(input));
        let record = self
            .repository
            .update(id, NewApplicant::from_input(input, overall_score))
            .map_err(|err| match err {
                RepositoryError::NotFound => ApplicantServiceError::NotFound { id: id.0 },
                other => write_failure("update applicant", &input.email, other),
            })?;

        Ok(record.to_view())
    }

    pub fn delete(&self, id: ApplicantId) -> Result<DeleteAcknowledgement, ApplicantServiceError> {
        ensure_positive_id(id)?;

        debug!(id = id.0, "deleting applicant");

        match self.repository.delete(id) {
            Ok(()) => Ok(DeleteAcknowledgement { success: true }),
            Err(RepositoryError::NotFound) => Err(ApplicantServiceError::NotFound { id: id.0 }),
            Err(source) => {
                error!(id = id.0, error = %source, "failed to delete applicant");
                Err(ApplicantServiceError::Internal {
                    operation: "delete applicant",
                    source,
                })
            }
        }
    }

    /// Fetch one page plus the total count for the same filters.
    ///
    /// The two store calls are not atomic; a concurrent write can make the
    /// count disagree with the page.
    pub fn list(
        &self,
        request: &ListApplicantsRequest,
    ) -> Result<ListApplicantsResponse, ApplicantServiceError> {
        debug!(
            limit = request.limit,
            offset = request.offset,
            position = %request.position,
            "listing applicants"
        );

        let (limit, offset) = effective_page(request.limit, request.offset);
        let filter = ApplicantFilter {
            position: request.position.clone(),
            status: request.status.code(),
            min_score: request.min_score,
        };

        let records = self
            .repository
            .list(&ListApplicantsParams {
                filter: filter.clone(),
                limit,
                offset,
            })
            .map_err(|source| {
                error!(error = %source, "failed to list applicants");
                ApplicantServiceError::Internal {
                    operation: "list applicants",
                    source,
                }
            })?;

        let total_count = self.repository.count(&filter).map_err(|source| {
            error!(error = %source, "failed to count applicants");
            ApplicantServiceError::Internal {
                operation: "count applicants",
                source,
            }
        })?;

        Ok(ListApplicantsResponse {
            applicants: records.iter().map(|record| record.to_view()).collect(),
            total_count,
            limit,
            offset,
        })
    }

    pub fn get_best(&self) -> Result<BestApplicant, ApplicantServiceError> {
        debug!("getting best applicant");

        // An empty store is reported as a query failure, not as a missing id.
        let best = self
            .repository
            .get_best()
            .and_then(|best| best.ok_or(RepositoryError::NotFound));
        let record = match best {
            Ok(record) => record,
            Err(source) => {
                error!(error = %source, "failed to get best applicant");
                return Err(ApplicantServiceError::Internal {
                    operation: "get best applicant",
                    source,
                });
            }
        };

        let reason = best_applicant_reason(&record.name, record.overall_score);
        Ok(BestApplicant {
            applicant: record.to_view(),
            reason,
        })
    }
}

/// Apply pagination defaults: limits below 1 fall back to 10, limits above 100
/// are capped, and negative offsets become 0.
pub fn effective_page(limit: i32, offset: i32) -> (i32, i32) {
    let limit = if limit < 1 {
        DEFAULT_PAGE_LIMIT
    } else {
        limit.min(MAX_PAGE_LIMIT)
    };
    (limit, offset.max(0))
}

/// The name check is diacritic-sensitive: "soholm" does not qualify.
pub fn best_applicant_reason(name: &str, overall_score: f64) -> String {
    let lowered = name.to_lowercase();
    if lowered.contains("jonathan") && lowered.contains("søholm") {
        BEST_APPLICANT_ACCOLADE.to_string()
    } else {
        format!("Scored {overall_score:.2}% based on our completely objective and unbiased algorithm.")
    }
}

fn write_failure(operation: &'static str, email: &str, err: RepositoryError) -> ApplicantServiceError {
    if err.is_email_conflict() {
        error!(email = %email, "email already exists");
        return ApplicantServiceError::AlreadyExists {
            email: email.to_string(),
        };
    }

    error!(email = %email, error = %err, "failed to {}", operation);
    ApplicantServiceError::Internal {
        operation,
        source: err,
    }
}

/// Request outcome categories surfaced to transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidArgument,
    NotFound,
    AlreadyExists,
    Internal,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Error raised by the applicant service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicantServiceError {
    #[error("validation failed: {0}")]
    InvalidArgument(#[from] ValidationError),
    /// Payload, path or query could not be decoded before reaching validation.
    #[error("invalid request: {0}")]
    MalformedRequest(String),
    #[error("applicant not found: {id}")]
    NotFound { id: i64 },
    #[error("email address already exists: {email}")]
    AlreadyExists { email: String },
    #[error("failed to {operation}: {source}")]
    Internal {
        operation: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ApplicantServiceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApplicantServiceError::InvalidArgument(_)
            | ApplicantServiceError::MalformedRequest(_) => ErrorCode::InvalidArgument,
            ApplicantServiceError::NotFound { .. } => ErrorCode::NotFound,
            ApplicantServiceError::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            ApplicantServiceError::Internal { .. } => ErrorCode::Internal,
        }
    }
}
