use std::sync::OnceLock;

use regex::Regex;

use super::domain::{ApplicantId, ApplicantInput};

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 255;
const POSITION_MIN_LEN: usize = 2;
const SCORE_MIN: f64 = 0.0;
const SCORE_MAX: f64 = 100.0;

/// Whether a payload is being validated for a create or for an update of `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update(ApplicantId),
}

/// First rule an applicant payload failed. Messages are part of the public contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("id must be positive")]
    IdNotPositive,
    #[error("name is required")]
    NameRequired,
    #[error("name must be at least 2 characters")]
    NameTooShort,
    #[error("name must be at most 255 characters")]
    NameTooLong,
    #[error("email is required")]
    EmailRequired,
    #[error("email must be a valid email address")]
    EmailInvalid,
    #[error("position is required")]
    PositionRequired,
    #[error("position must be at least 2 characters")]
    PositionTooShort,
    #[error("years_experience must be positive")]
    NegativeYearsExperience,
    #[error("github_stars must be positive")]
    NegativeGithubStars,
    #[error("{field} must be between 0 and 100")]
    ScoreOutOfRange { field: &'static str },
}

/// Reject non-positive ids before any store round-trip.
pub fn ensure_positive_id(id: ApplicantId) -> Result<(), ValidationError> {
    if id.is_positive() {
        Ok(())
    } else {
        Err(ValidationError::IdNotPositive)
    }
}

/// Check an applicant payload. Rules run in a fixed order and the first failure wins.
///
/// Lengths are measured in bytes on the untrimmed value; only the "required"
/// checks look at the trimmed text.
pub fn validate_applicant(
    input: &ApplicantInput,
    mode: ValidationMode,
) -> Result<(), ValidationError> {
    if let ValidationMode::Update(id) = mode {
        ensure_positive_id(id)?;
    }

    if input.name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if input.name.len() < NAME_MIN_LEN {
        return Err(ValidationError::NameTooShort);
    }
    if input.name.len() > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong);
    }

    if input.email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(&input.email) {
        return Err(ValidationError::EmailInvalid);
    }

    if input.position.trim().is_empty() {
        return Err(ValidationError::PositionRequired);
    }
    if input.position.len() < POSITION_MIN_LEN {
        return Err(ValidationError::PositionTooShort);
    }

    if input.years_experience < 0 {
        return Err(ValidationError::NegativeYearsExperience);
    }
    if input.github_stars < 0 {
        return Err(ValidationError::NegativeGithubStars);
    }

    check_score("interview_score", input.interview_score)?;
    check_score("cultural_fit_score", input.cultural_fit_score)?;
    check_score("technical_score", input.technical_score)?;

    Ok(())
}

fn check_score(field: &'static str, value: f64) -> Result<(), ValidationError> {
    // NaN fails the range check as well.
    if (SCORE_MIN..=SCORE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::ScoreOutOfRange { field })
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // atext per RFC 5322, widened with any non-ASCII character (RFC 6532).
        let atom = r"(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]|[^\x00-\x7F])+";
        let quoted = r#""(?:[^"\\\r\n]|\\.)*""#;
        let dot_atom = format!(r"{atom}(?:\.{atom})*");
        let addr_spec = format!(r"(?:{dot_atom}|{quoted})@{dot_atom}");
        Regex::new(&format!(r"^(?:{addr_spec}|[^<>@]*<{addr_spec}>)$"))
            .expect("email pattern compiles")
    })
}

/// Accepts a single `local@domain` address, optionally wrapped as `Display Name <local@domain>`.
/// The local part may be a quoted string; domains are dot-separated atoms, not literals.
pub fn is_valid_email(raw: &str) -> bool {
    email_pattern().is_match(raw.trim())
}
