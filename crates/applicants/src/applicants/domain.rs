use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the persistence layer when an applicant is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantId(pub i64);

impl ApplicantId {
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

/// Hiring pipeline status. Numeric codes are what the store persists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicantStatus {
    #[default]
    #[serde(rename = "APPLICANT_STATUS_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "APPLICANT_STATUS_APPLIED")]
    Applied,
    #[serde(rename = "APPLICANT_STATUS_REVIEWING")]
    Reviewing,
    #[serde(rename = "APPLICANT_STATUS_INTERVIEWED")]
    Interviewed,
    #[serde(rename = "APPLICANT_STATUS_HIRED")]
    Hired,
    #[serde(rename = "APPLICANT_STATUS_REJECTED")]
    Rejected,
    /// Only ever used by the seed roster.
    #[serde(rename = "APPLICANT_STATUS_OBVIOUSLY_THE_BEST")]
    ObviouslyTheBest,
}

impl ApplicantStatus {
    pub const fn code(self) -> i32 {
        match self {
            ApplicantStatus::Unspecified => 0,
            ApplicantStatus::Applied => 1,
            ApplicantStatus::Reviewing => 2,
            ApplicantStatus::Interviewed => 3,
            ApplicantStatus::Hired => 4,
            ApplicantStatus::Rejected => 5,
            ApplicantStatus::ObviouslyTheBest => 6,
        }
    }

    /// Unknown codes collapse to `Unspecified`.
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => ApplicantStatus::Applied,
            2 => ApplicantStatus::Reviewing,
            3 => ApplicantStatus::Interviewed,
            4 => ApplicantStatus::Hired,
            5 => ApplicantStatus::Rejected,
            6 => ApplicantStatus::ObviouslyTheBest,
            _ => ApplicantStatus::Unspecified,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ApplicantStatus::Unspecified => "unspecified",
            ApplicantStatus::Applied => "applied",
            ApplicantStatus::Reviewing => "reviewing",
            ApplicantStatus::Interviewed => "interviewed",
            ApplicantStatus::Hired => "hired",
            ApplicantStatus::Rejected => "rejected",
            ApplicantStatus::ObviouslyTheBest => "obviously_the_best",
        }
    }
}

/// Caller-supplied applicant payload used for both create and full-replace update.
///
/// Optional text fields arrive as plain strings; an empty string means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicantInput {
    pub name: String,
    pub email: String,
    pub position: String,
    pub years_experience: i32,
    pub skills: Vec<String>,
    pub github_stars: i32,
    pub can_exit_vim: bool,
    pub knows_go: bool,
    pub debugs_in_production: bool,
    pub interview_score: f64,
    pub cultural_fit_score: f64,
    pub technical_score: f64,
    pub status: ApplicantStatus,
    pub fun_fact: String,
    pub availability: String,
    pub salary_expectation: String,
}

/// Parameters handed to the store on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplicant {
    pub name: String,
    pub email: String,
    pub position: String,
    pub years_experience: i32,
    pub skills: Vec<String>,
    pub github_stars: i32,
    pub can_exit_vim: bool,
    pub knows_go: bool,
    pub debugs_in_production: bool,
    pub interview_score: f64,
    pub cultural_fit_score: f64,
    pub technical_score: f64,
    pub overall_score: f64,
    pub status: i32,
    pub fun_fact: Option<String>,
    pub availability: Option<String>,
    pub salary_expectation: Option<String>,
}

/// Row shape returned by the store. Scores keep full precision here.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredApplicant {
    pub id: ApplicantId,
    pub name: String,
    pub email: String,
    pub position: String,
    pub years_experience: i32,
    pub skills: Vec<String>,
    pub github_stars: i32,
    pub can_exit_vim: bool,
    pub knows_go: bool,
    pub debugs_in_production: bool,
    pub interview_score: f64,
    pub cultural_fit_score: f64,
    pub technical_score: f64,
    pub overall_score: f64,
    pub status: i32,
    pub fun_fact: Option<String>,
    pub availability: Option<String>,
    pub salary_expectation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredApplicant {
    pub fn from_new(
        id: ApplicantId,
        applicant: NewApplicant,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: applicant.name,
            email: applicant.email,
            position: applicant.position,
            years_experience: applicant.years_experience,
            skills: applicant.skills,
            github_stars: applicant.github_stars,
            can_exit_vim: applicant.can_exit_vim,
            knows_go: applicant.knows_go,
            debugs_in_production: applicant.debugs_in_production,
            interview_score: applicant.interview_score,
            cultural_fit_score: applicant.cultural_fit_score,
            technical_score: applicant.technical_score,
            overall_score: applicant.overall_score,
            status: applicant.status,
            fun_fact: applicant.fun_fact,
            availability: applicant.availability,
            salary_expectation: applicant.salary_expectation,
            created_at,
            updated_at,
        }
    }
}

/// Externally exposed applicant with display-rounded scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub position: String,
    pub years_experience: i32,
    pub skills: Vec<String>,
    pub github_stars: i32,
    pub can_exit_vim: bool,
    pub knows_go: bool,
    pub debugs_in_production: bool,
    pub interview_score: f64,
    pub cultural_fit_score: f64,
    pub technical_score: f64,
    pub overall_score: f64,
    pub status: ApplicantStatus,
    pub fun_fact: String,
    pub availability: String,
    pub salary_expectation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filters shared by the page query and the count query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantFilter {
    /// Empty matches every position.
    pub position: String,
    /// `0` matches every status.
    pub status: i32,
    /// Values `<= 0` disable the threshold.
    pub min_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListApplicantsParams {
    pub filter: ApplicantFilter,
    pub limit: i32,
    pub offset: i32,
}

/// List request as received from callers, before pagination defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListApplicantsRequest {
    pub position: String,
    pub status: ApplicantStatus,
    pub min_score: f64,
    pub limit: i32,
    pub offset: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListApplicantsResponse {
    pub applicants: Vec<ApplicantView>,
    pub total_count: i64,
    pub limit: i32,
    pub offset: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestApplicant {
    pub applicant: ApplicantView,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAcknowledgement {
    pub success: bool,
}
