use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::applicants::domain::{
    ApplicantFilter, ApplicantId, ApplicantInput, ApplicantStatus, ListApplicantsParams,
    NewApplicant, StoredApplicant,
};
use crate::applicants::memory::InMemoryApplicantRepository;
use crate::applicants::repository::{ApplicantRepository, RepositoryError};
use crate::applicants::{applicant_router, ApplicantService};

pub(super) fn input() -> ApplicantInput {
    ApplicantInput {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        position: "Senior Developer".to_string(),
        years_experience: 5,
        skills: vec!["Go".to_string(), "Kubernetes".to_string()],
        github_stars: 200,
        can_exit_vim: true,
        knows_go: true,
        debugs_in_production: false,
        interview_score: 70.0,
        cultural_fit_score: 70.0,
        technical_score: 70.0,
        status: ApplicantStatus::Applied,
        fun_fact: "Prefers tabs over spaces".to_string(),
        availability: String::new(),
        salary_expectation: String::new(),
    }
}

pub(super) fn input_for(name: &str, email: &str) -> ApplicantInput {
    ApplicantInput {
        name: name.to_string(),
        email: email.to_string(),
        ..input()
    }
}

pub(super) fn stored(id: i64) -> StoredApplicant {
    let timestamp = Utc
        .with_ymd_and_hms(2025, 3, 14, 9, 26, 53)
        .single()
        .expect("valid timestamp");
    StoredApplicant {
        id: ApplicantId(id),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        position: "Senior Developer".to_string(),
        years_experience: 5,
        skills: vec!["Go".to_string(), "Python".to_string(), "Kubernetes".to_string()],
        github_stars: 150,
        can_exit_vim: true,
        knows_go: true,
        debugs_in_production: false,
        interview_score: 85.5555,
        cultural_fit_score: 90.9999,
        technical_score: 88.1234,
        overall_score: 87.6789,
        status: ApplicantStatus::Applied.code(),
        fun_fact: Some("Loves Go".to_string()),
        availability: Some("2 weeks".to_string()),
        salary_expectation: None,
        created_at: timestamp,
        updated_at: timestamp,
    }
}

pub(super) fn build_service() -> (
    ApplicantService<InMemoryApplicantRepository>,
    Arc<InMemoryApplicantRepository>,
) {
    let repository = Arc::new(InMemoryApplicantRepository::default());
    let service = ApplicantService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_repository<R>(repository: R) -> axum::Router
where
    R: ApplicantRepository + 'static,
{
    applicant_router(Arc::new(ApplicantService::new(Arc::new(repository))))
}

/// Delegates to the in-memory store while recording every call and its parameters.
#[derive(Default)]
pub(super) struct RecordingRepository {
    inner: InMemoryApplicantRepository,
    calls: Mutex<Vec<&'static str>>,
    list_params: Mutex<Vec<ListApplicantsParams>>,
    count_filters: Mutex<Vec<ApplicantFilter>>,
}

impl RecordingRepository {
    fn record(&self, call: &'static str) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }

    pub(super) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    pub(super) fn list_params(&self) -> Vec<ListApplicantsParams> {
        self.list_params.lock().expect("params mutex poisoned").clone()
    }

    pub(super) fn count_filters(&self) -> Vec<ApplicantFilter> {
        self.count_filters
            .lock()
            .expect("filters mutex poisoned")
            .clone()
    }
}

impl ApplicantRepository for RecordingRepository {
    fn create(&self, applicant: NewApplicant) -> Result<StoredApplicant, RepositoryError> {
        self.record("create");
        self.inner.create(applicant)
    }

    fn get_by_id(&self, id: ApplicantId) -> Result<Option<StoredApplicant>, RepositoryError> {
        self.record("get_by_id");
        self.inner.get_by_id(id)
    }

    fn update(
        &self,
        id: ApplicantId,
        applicant: NewApplicant,
    ) -> Result<StoredApplicant, RepositoryError> {
        self.record("update");
        self.inner.update(id, applicant)
    }

    fn delete(&self, id: ApplicantId) -> Result<(), RepositoryError> {
        self.record("delete");
        self.inner.delete(id)
    }

    fn list(&self, params: &ListApplicantsParams) -> Result<Vec<StoredApplicant>, RepositoryError> {
        self.record("list");
        self.list_params
            .lock()
            .expect("params mutex poisoned")
            .push(params.clone());
        self.inner.list(params)
    }

    fn count(&self, filter: &ApplicantFilter) -> Result<i64, RepositoryError> {
        self.record("count");
        self.count_filters
            .lock()
            .expect("filters mutex poisoned")
            .push(filter.clone());
        self.inner.count(filter)
    }

    fn get_best(&self) -> Result<Option<StoredApplicant>, RepositoryError> {
        self.record("get_best");
        self.inner.get_best()
    }
}

pub(super) struct UnavailableRepository;

impl ApplicantRepository for UnavailableRepository {
    fn create(&self, _applicant: NewApplicant) -> Result<StoredApplicant, RepositoryError> {
        Err(offline())
    }

    fn get_by_id(&self, _id: ApplicantId) -> Result<Option<StoredApplicant>, RepositoryError> {
        Err(offline())
    }

    fn update(
        &self,
        _id: ApplicantId,
        _applicant: NewApplicant,
    ) -> Result<StoredApplicant, RepositoryError> {
        Err(offline())
    }

    fn delete(&self, _id: ApplicantId) -> Result<(), RepositoryError> {
        Err(offline())
    }

    fn list(&self, _params: &ListApplicantsParams) -> Result<Vec<StoredApplicant>, RepositoryError> {
        Err(offline())
    }

    fn count(&self, _filter: &ApplicantFilter) -> Result<i64, RepositoryError> {
        Err(offline())
    }

    fn get_best(&self) -> Result<Option<StoredApplicant>, RepositoryError> {
        Err(offline())
    }
}

fn offline() -> RepositoryError {
    RepositoryError::Unavailable("database offline".to_string())
}

/// Page queries succeed but the follow-up count fails.
pub(super) struct CountFailureRepository;

impl ApplicantRepository for CountFailureRepository {
    fn create(&self, _applicant: NewApplicant) -> Result<StoredApplicant, RepositoryError> {
        Err(offline())
    }

    fn get_by_id(&self, _id: ApplicantId) -> Result<Option<StoredApplicant>, RepositoryError> {
        Ok(None)
    }

    fn update(
        &self,
        _id: ApplicantId,
        _applicant: NewApplicant,
    ) -> Result<StoredApplicant, RepositoryError> {
        Err(offline())
    }

    fn delete(&self, _id: ApplicantId) -> Result<(), RepositoryError> {
        Err(offline())
    }

    fn list(&self, _params: &ListApplicantsParams) -> Result<Vec<StoredApplicant>, RepositoryError> {
        Ok(vec![stored(1)])
    }

    fn count(&self, _filter: &ApplicantFilter) -> Result<i64, RepositoryError> {
        Err(offline())
    }

    fn get_best(&self) -> Result<Option<StoredApplicant>, RepositoryError> {
        Ok(None)
    }
}

/// Rejects writes with a unique violation on the given constraint.
pub(super) struct UniqueViolationRepository(pub(super) &'static str);

impl ApplicantRepository for UniqueViolationRepository {
    fn create(&self, _applicant: NewApplicant) -> Result<StoredApplicant, RepositoryError> {
        Err(self.violation())
    }

    fn get_by_id(&self, _id: ApplicantId) -> Result<Option<StoredApplicant>, RepositoryError> {
        Ok(None)
    }

    fn update(
        &self,
        _id: ApplicantId,
        _applicant: NewApplicant,
    ) -> Result<StoredApplicant, RepositoryError> {
        Err(self.violation())
    }

    fn delete(&self, _id: ApplicantId) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn list(&self, _params: &ListApplicantsParams) -> Result<Vec<StoredApplicant>, RepositoryError> {
        Ok(Vec::new())
    }

    fn count(&self, _filter: &ApplicantFilter) -> Result<i64, RepositoryError> {
        Ok(0)
    }

    fn get_best(&self) -> Result<Option<StoredApplicant>, RepositoryError> {
        Ok(None)
    }
}

impl UniqueViolationRepository {
    fn violation(&self) -> RepositoryError {
        RepositoryError::UniqueViolation {
            constraint: self.0.to_string(),
        }
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
