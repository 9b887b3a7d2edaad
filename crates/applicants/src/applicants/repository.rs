use super::domain::{
    ApplicantFilter, ApplicantId, ListApplicantsParams, NewApplicant, StoredApplicant,
};

/// Name of the unique index guarding applicant e-mail addresses.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "applicants_email_key";

/// Storage abstraction so the service can be exercised against any backend.
///
/// Implementations classify their own failures; the service never inspects
/// driver-specific error shapes.
pub trait ApplicantRepository: Send + Sync {
    fn create(&self, applicant: NewApplicant) -> Result<StoredApplicant, RepositoryError>;
    fn get_by_id(&self, id: ApplicantId) -> Result<Option<StoredApplicant>, RepositoryError>;
    /// Whole-record replace. `created_at` is preserved and `updated_at` refreshed.
    fn update(
        &self,
        id: ApplicantId,
        applicant: NewApplicant,
    ) -> Result<StoredApplicant, RepositoryError>;
    fn delete(&self, id: ApplicantId) -> Result<(), RepositoryError>;
    fn list(&self, params: &ListApplicantsParams) -> Result<Vec<StoredApplicant>, RepositoryError>;
    fn count(&self, filter: &ApplicantFilter) -> Result<i64, RepositoryError>;
    /// Applicant with the highest overall score, or `None` for an empty store.
    fn get_best(&self) -> Result<Option<StoredApplicant>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("duplicate key value violates unique constraint \"{constraint}\"")]
    UniqueViolation { constraint: String },
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    pub fn is_email_conflict(&self) -> bool {
        matches!(self, RepositoryError::UniqueViolation { constraint } if constraint.contains("email"))
    }
}
