use super::domain::ApplicantInput;

const TECHNICAL_WEIGHT: f64 = 0.4;
const INTERVIEW_WEIGHT: f64 = 0.3;
const CULTURAL_FIT_WEIGHT: f64 = 0.3;

const JAVA_WITHOUT_GO_FACTOR: f64 = 0.7;
const JAVASCRIPT_WITHOUT_GO_FACTOR: f64 = 0.75;
const VIM_EXIT_BONUS: f64 = 2.0;
const PRODUCTION_DEBUGGING_BONUS: f64 = 1.0;
const UNDISCLOSED_DEBUGGING_PENALTY: f64 = 0.5;
const UNDISCLOSED_DEBUGGING_MIN_YEARS: i32 = 2;
const EXPERIENCE_STEP: f64 = 0.5;
const EXPERIENCE_CAP: f64 = 3.5;
const SKILL_DIVERSITY_THRESHOLD: usize = 5;
const SKILL_DIVERSITY_STEP: f64 = 0.2;
const SKILL_DIVERSITY_CAP: f64 = 2.0;
const SCORE_FLOOR: f64 = 0.0;
const SCORE_CEILING: f64 = 100.0;

/// Attributes the overall score is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs<'a> {
    /// Not read by the calculator: names never influence the score.
    pub name: &'a str,
    pub skills: &'a [String],
    pub years_experience: i32,
    pub interview_score: f64,
    pub cultural_fit_score: f64,
    pub technical_score: f64,
    pub can_exit_vim: bool,
    pub knows_go: bool,
    pub debugs_in_production: bool,
}

impl<'a> From<&'a ApplicantInput> for ScoreInputs<'a> {
    fn from(input: &'a ApplicantInput) -> Self {
        Self {
            name: &input.name,
            skills: &input.skills,
            years_experience: input.years_experience,
            interview_score: input.interview_score,
            cultural_fit_score: input.cultural_fit_score,
            technical_score: input.technical_score,
            can_exit_vim: input.can_exit_vim,
            knows_go: input.knows_go,
            debugs_in_production: input.debugs_in_production,
        }
    }
}

/// Derive the overall score in `[0, 100]`, rounded to two decimals.
///
/// Never fails: inputs outside their usual ranges are tolerated and only the
/// final value is clamped. The multiplicative penalties are applied at fixed
/// points in the sequence, so reordering the steps changes the result.
pub fn calculate_overall_score(inputs: &ScoreInputs<'_>) -> f64 {
    let mut score = inputs.technical_score * TECHNICAL_WEIGHT
        + inputs.interview_score * INTERVIEW_WEIGHT
        + inputs.cultural_fit_score * CULTURAL_FIT_WEIGHT;

    if contains_skill(inputs.skills, "Java") && !inputs.knows_go {
        score *= JAVA_WITHOUT_GO_FACTOR;
    }

    if inputs.can_exit_vim {
        score += VIM_EXIT_BONUS;
    }

    if inputs.debugs_in_production {
        score += PRODUCTION_DEBUGGING_BONUS;
    } else if inputs.years_experience > UNDISCLOSED_DEBUGGING_MIN_YEARS {
        score -= UNDISCLOSED_DEBUGGING_PENALTY;
    }

    score += (f64::from(inputs.years_experience) * EXPERIENCE_STEP).min(EXPERIENCE_CAP);

    let skill_count = inputs.skills.len();
    if skill_count > SKILL_DIVERSITY_THRESHOLD {
        let extra = (skill_count - SKILL_DIVERSITY_THRESHOLD) as f64;
        score += (extra * SKILL_DIVERSITY_STEP).min(SKILL_DIVERSITY_CAP);
    }

    if contains_skill(inputs.skills, "JavaScript")
        && !contains_skill(inputs.skills, "TypeScript")
        && !inputs.knows_go
    {
        score *= JAVASCRIPT_WITHOUT_GO_FACTOR;
    }

    round_to_two_decimals(score.min(SCORE_CEILING).max(SCORE_FLOOR))
}

/// Case-insensitive comparison against whole skill tokens; "Java" does not match "JavaScript".
pub fn contains_skill(skills: &[String], skill: &str) -> bool {
    let wanted = skill.to_lowercase();
    skills.iter().any(|candidate| candidate.to_lowercase() == wanted)
}

/// Round half away from zero to two decimal places.
pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
