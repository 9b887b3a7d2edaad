//! Applicant intake, scoring, and the CRUD operations exposed over HTTP.
//!
//! Validation and scoring are pure functions; the service orchestrates them
//! around an injected [`ApplicantRepository`] and classifies every failure into
//! an [`ErrorCode`].

pub mod domain;
mod mapping;
pub mod memory;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantFilter, ApplicantId, ApplicantInput, ApplicantStatus, ApplicantView, BestApplicant,
    DeleteAcknowledgement, ListApplicantsParams, ListApplicantsRequest, ListApplicantsResponse,
    NewApplicant, StoredApplicant,
};
pub use mapping::normalize_optional;
pub use memory::InMemoryApplicantRepository;
pub use repository::{ApplicantRepository, RepositoryError, EMAIL_UNIQUE_CONSTRAINT};
pub use router::{applicant_router, ApplicantEnvelope};
pub use scoring::{calculate_overall_score, contains_skill, round_to_two_decimals, ScoreInputs};
pub use service::{
    best_applicant_reason, effective_page, ApplicantService, ApplicantServiceError, ErrorCode,
    DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
pub use validation::{validate_applicant, ValidationError, ValidationMode};
