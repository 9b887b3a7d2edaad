use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use super::domain::{
    ApplicantFilter, ApplicantId, ListApplicantsParams, NewApplicant, StoredApplicant,
};
use super::repository::{ApplicantRepository, RepositoryError, EMAIL_UNIQUE_CONSTRAINT};

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    records: BTreeMap<ApplicantId, StoredApplicant>,
}

impl MemoryState {
    fn email_taken(&self, email: &str, except: Option<ApplicantId>) -> bool {
        self.records
            .values()
            .any(|record| record.email == email && Some(record.id) != except)
    }
}

/// Process-local store honouring the applicants table contract: sequential ids,
/// a unique e-mail index, and the list/count/best query semantics.
#[derive(Debug, Default, Clone)]
pub struct InMemoryApplicantRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryApplicantRepository {
    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

fn email_conflict() -> RepositoryError {
    RepositoryError::UniqueViolation {
        constraint: EMAIL_UNIQUE_CONSTRAINT.to_string(),
    }
}

fn matches_filter(record: &StoredApplicant, filter: &ApplicantFilter) -> bool {
    (filter.position.is_empty() || record.position == filter.position)
        && (filter.status == 0 || record.status == filter.status)
        && (filter.min_score <= 0.0 || record.overall_score >= filter.min_score)
}

impl ApplicantRepository for InMemoryApplicantRepository {
    fn create(&self, applicant: NewApplicant) -> Result<StoredApplicant, RepositoryError> {
        let mut state = self.lock()?;
        if state.email_taken(&applicant.email, None) {
            return Err(email_conflict());
        }

        state.last_id += 1;
        let id = ApplicantId(state.last_id);
        let now = Utc::now();
        let record = StoredApplicant::from_new(id, applicant, now, now);
        state.records.insert(id, record.clone());
        Ok(record)
    }

    fn get_by_id(&self, id: ApplicantId) -> Result<Option<StoredApplicant>, RepositoryError> {
        let state = self.lock()?;
        Ok(state.records.get(&id).cloned())
    }

    fn update(
        &self,
        id: ApplicantId,
        applicant: NewApplicant,
    ) -> Result<StoredApplicant, RepositoryError> {
        let mut state = self.lock()?;
        let created_at = state
            .records
            .get(&id)
            .map(|existing| existing.created_at)
            .ok_or(RepositoryError::NotFound)?;
        if state.email_taken(&applicant.email, Some(id)) {
            return Err(email_conflict());
        }

        let record = StoredApplicant::from_new(id, applicant, created_at, Utc::now());
        state.records.insert(id, record.clone());
        Ok(record)
    }

    fn delete(&self, id: ApplicantId) -> Result<(), RepositoryError> {
        let mut state = self.lock()?;
        state
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn list(&self, params: &ListApplicantsParams) -> Result<Vec<StoredApplicant>, RepositoryError> {
        let state = self.lock()?;
        let mut page: Vec<StoredApplicant> = state
            .records
            .values()
            .filter(|record| matches_filter(record, &params.filter))
            .cloned()
            .collect();

        page.sort_by(|left, right| {
            right
                .created_at
                .cmp(&left.created_at)
                .then_with(|| right.id.cmp(&left.id))
        });

        let offset = usize::try_from(params.offset).unwrap_or(0);
        let limit = usize::try_from(params.limit).unwrap_or(0);
        Ok(page.into_iter().skip(offset).take(limit).collect())
    }

    fn count(&self, filter: &ApplicantFilter) -> Result<i64, RepositoryError> {
        let state = self.lock()?;
        let total = state
            .records
            .values()
            .filter(|record| matches_filter(record, filter))
            .count();
        Ok(total as i64)
    }

    fn get_best(&self) -> Result<Option<StoredApplicant>, RepositoryError> {
        let state = self.lock()?;
        // Ids iterate in ascending order, so ties keep the earliest applicant.
        let best = state
            .records
            .values()
            .fold(None::<&StoredApplicant>, |best, record| match best {
                Some(current) if current.overall_score >= record.overall_score => Some(current),
                _ => Some(record),
            });
        Ok(best.cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant(email: &str, position: &str, status: i32, overall_score: f64) -> NewApplicant {
        NewApplicant {
            name: "Test Applicant".to_string(),
            email: email.to_string(),
            position: position.to_string(),
            years_experience: 3,
            skills: vec!["Go".to_string()],
            github_stars: 10,
            can_exit_vim: true,
            knows_go: true,
            debugs_in_production: false,
            interview_score: 70.0,
            cultural_fit_score: 70.0,
            technical_score: 70.0,
            overall_score,
            status,
            fun_fact: None,
            availability: None,
            salary_expectation: None,
        }
    }

    #[test]
    fn create_assigns_sequential_ids_and_rejects_duplicate_emails() {
        let repository = InMemoryApplicantRepository::default();
        let first = repository
            .create(applicant("a@example.com", "Developer", 1, 70.0))
            .expect("first insert");
        let second = repository
            .create(applicant("b@example.com", "Developer", 1, 70.0))
            .expect("second insert");
        assert_eq!(first.id, ApplicantId(1));
        assert_eq!(second.id, ApplicantId(2));
        assert_eq!(first.created_at, first.updated_at);

        let err = repository
            .create(applicant("a@example.com", "Developer", 1, 70.0))
            .expect_err("duplicate email rejected");
        assert!(err.is_email_conflict());
    }

    #[test]
    fn update_keeps_created_at_and_allows_own_email() {
        let repository = InMemoryApplicantRepository::default();
        let created = repository
            .create(applicant("a@example.com", "Developer", 1, 70.0))
            .expect("insert");
        repository
            .create(applicant("b@example.com", "Developer", 1, 70.0))
            .expect("insert");

        let updated = repository
            .update(created.id, applicant("a@example.com", "Lead", 2, 80.0))
            .expect("update with own email");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.position, "Lead");

        let conflict = repository
            .update(created.id, applicant("b@example.com", "Lead", 2, 80.0))
            .expect_err("email owned by another applicant");
        assert!(conflict.is_email_conflict());

        assert_eq!(
            repository.update(ApplicantId(99), applicant("c@example.com", "Lead", 2, 80.0)),
            Err(RepositoryError::NotFound)
        );
    }

    #[test]
    fn delete_reports_missing_records() {
        let repository = InMemoryApplicantRepository::default();
        let created = repository
            .create(applicant("a@example.com", "Developer", 1, 70.0))
            .expect("insert");
        assert_eq!(repository.delete(created.id), Ok(()));
        assert_eq!(repository.delete(created.id), Err(RepositoryError::NotFound));
        assert_eq!(repository.get_by_id(created.id), Ok(None));
    }

    #[test]
    fn list_and_count_apply_the_same_filters() {
        let repository = InMemoryApplicantRepository::default();
        repository
            .create(applicant("a@example.com", "Developer", 1, 55.0))
            .expect("insert");
        repository
            .create(applicant("b@example.com", "Developer", 2, 81.0))
            .expect("insert");
        repository
            .create(applicant("c@example.com", "Designer", 2, 90.0))
            .expect("insert");

        let filter = ApplicantFilter {
            position: "Developer".to_string(),
            status: 0,
            min_score: 60.0,
        };
        let page = repository
            .list(&ListApplicantsParams {
                filter: filter.clone(),
                limit: 10,
                offset: 0,
            })
            .expect("list");
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].email, "b@example.com");
        assert_eq!(repository.count(&filter), Ok(1));

        let by_status = ApplicantFilter {
            status: 2,
            ..ApplicantFilter::default()
        };
        assert_eq!(repository.count(&by_status), Ok(2));
        assert_eq!(repository.count(&ApplicantFilter::default()), Ok(3));
    }

    #[test]
    fn list_pages_newest_first() {
        let repository = InMemoryApplicantRepository::default();
        for index in 0..5 {
            repository
                .create(applicant(
                    &format!("user{index}@example.com"),
                    "Developer",
                    1,
                    50.0,
                ))
                .expect("insert");
        }

        let page = repository
            .list(&ListApplicantsParams {
                filter: ApplicantFilter::default(),
                limit: 2,
                offset: 1,
            })
            .expect("list");
        let ids: Vec<i64> = page.iter().map(|record| record.id.0).collect();
        assert_eq!(ids, vec![4, 3]);
    }

    #[test]
    fn best_prefers_highest_score_then_lowest_id() {
        let repository = InMemoryApplicantRepository::default();
        assert_eq!(repository.get_best(), Ok(None));

        repository
            .create(applicant("a@example.com", "Developer", 1, 88.0))
            .expect("insert");
        repository
            .create(applicant("b@example.com", "Developer", 1, 92.5))
            .expect("insert");
        repository
            .create(applicant("c@example.com", "Developer", 1, 92.5))
            .expect("insert");

        let best = repository.get_best().expect("best").expect("present");
        assert_eq!(best.email, "b@example.com");
    }
}
