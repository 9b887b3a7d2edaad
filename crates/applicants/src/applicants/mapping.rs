use super::domain::{ApplicantInput, ApplicantStatus, ApplicantView, NewApplicant, StoredApplicant};
use super::scoring::round_to_two_decimals;

/// Callers send `""` for "not provided"; the store only ever sees `None` for that case.
pub fn normalize_optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn optional_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl NewApplicant {
    /// Build store parameters from a caller payload and its freshly computed overall score.
    pub fn from_input(input: &ApplicantInput, overall_score: f64) -> Self {
        Self {
            name: input.name.clone(),
            email: input.email.clone(),
            position: input.position.clone(),
            years_experience: input.years_experience,
            skills: input.skills.clone(),
            github_stars: input.github_stars,
            can_exit_vim: input.can_exit_vim,
            knows_go: input.knows_go,
            debugs_in_production: input.debugs_in_production,
            interview_score: input.interview_score,
            cultural_fit_score: input.cultural_fit_score,
            technical_score: input.technical_score,
            overall_score,
            status: input.status.code(),
            fun_fact: normalize_optional(&input.fun_fact),
            availability: normalize_optional(&input.availability),
            salary_expectation: normalize_optional(&input.salary_expectation),
        }
    }
}

impl StoredApplicant {
    /// External representation. Only the returned copy is rounded; the stored scores keep full precision.
    pub fn to_view(&self) -> ApplicantView {
        ApplicantView {
            id: self.id.0,
            name: self.name.clone(),
            email: self.email.clone(),
            position: self.position.clone(),
            years_experience: self.years_experience,
            skills: self.skills.clone(),
            github_stars: self.github_stars,
            can_exit_vim: self.can_exit_vim,
            knows_go: self.knows_go,
            debugs_in_production: self.debugs_in_production,
            interview_score: round_to_two_decimals(self.interview_score),
            cultural_fit_score: round_to_two_decimals(self.cultural_fit_score),
            technical_score: round_to_two_decimals(self.technical_score),
            overall_score: round_to_two_decimals(self.overall_score),
            status: ApplicantStatus::from_code(self.status),
            fun_fact: optional_or_empty(&self.fun_fact),
            availability: optional_or_empty(&self.availability),
            salary_expectation: optional_or_empty(&self.salary_expectation),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
