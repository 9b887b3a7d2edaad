use std::sync::Arc;

use clap::Args;
use job_applicants::applicants::{
    ApplicantInput, ApplicantRepository, ApplicantService, ApplicantStatus, ApplicantView,
    BestApplicant, InMemoryApplicantRepository, ListApplicantsRequest, MAX_PAGE_LIMIT,
};
use job_applicants::error::AppError;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of ranked applicants to print
    #[arg(long, default_value_t = 10)]
    pub(crate) limit: usize,
}

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Sample applicants used by `demo` and `serve --seed`.
pub(crate) fn seed_roster() -> Vec<ApplicantInput> {
    vec![
        ApplicantInput {
            name: "Jonathan Søholm-Boesen".to_string(),
            email: "jonathan@infobits.io".to_string(),
            position: "Senior Golang Developer".to_string(),
            years_experience: 10,
            skills: skills(&[
                "Go",
                "gRPC",
                "Kubernetes",
                "Being Modest",
                "Microservices",
                "Time Travel (minor)",
            ]),
            github_stars: 1337,
            can_exit_vim: true,
            knows_go: true,
            debugs_in_production: false,
            interview_score: 99.8,
            cultural_fit_score: 99.9,
            technical_score: 99.7,
            status: ApplicantStatus::ObviouslyTheBest,
            fun_fact: "Can center a div without Stack Overflow and writes self-documenting code"
                .to_string(),
            availability: "Immediate (time travel helps)".to_string(),
            salary_expectation: "Reasonable (but worth every penny)".to_string(),
        },
        ApplicantInput {
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            position: "Senior Golang Developer".to_string(),
            years_experience: 5,
            skills: skills(&["Go", "Python", "Docker", "AWS"]),
            github_stars: 234,
            can_exit_vim: true,
            knows_go: true,
            debugs_in_production: true,
            interview_score: 82.5,
            cultural_fit_score: 85.0,
            technical_score: 80.0,
            status: ApplicantStatus::Reviewing,
            fun_fact: "Prefers tabs over spaces".to_string(),
            availability: "2 weeks notice".to_string(),
            salary_expectation: "Market rate".to_string(),
        },
        ApplicantInput {
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            position: "Senior Golang Developer".to_string(),
            years_experience: 10,
            skills: skills(&["Java", "Spring Boot", "Hibernate", "XML"]),
            github_stars: 45,
            can_exit_vim: false,
            knows_go: false,
            debugs_in_production: true,
            interview_score: 65.0,
            cultural_fit_score: 70.0,
            technical_score: 60.0,
            status: ApplicantStatus::Applied,
            fun_fact: "Thinks Go is just Java without semicolons".to_string(),
            availability: "1 month".to_string(),
            salary_expectation: "Java rates + 20%".to_string(),
        },
        ApplicantInput {
            name: "Charlie Davis".to_string(),
            email: "charlie@example.com".to_string(),
            position: "Senior Golang Developer".to_string(),
            years_experience: 6,
            skills: skills(&["Go", "Rust", "React", "PostgreSQL"]),
            github_stars: 567,
            can_exit_vim: true,
            knows_go: true,
            debugs_in_production: false,
            interview_score: 88.0,
            cultural_fit_score: 86.0,
            technical_score: 89.0,
            status: ApplicantStatus::Interviewed,
            fun_fact: "Uses both tabs AND spaces inconsistently".to_string(),
            availability: "3 weeks".to_string(),
            salary_expectation: "Negotiable".to_string(),
        },
        ApplicantInput {
            name: "Diana Wilson".to_string(),
            email: "diana@example.com".to_string(),
            position: "Senior Golang Developer".to_string(),
            years_experience: 4,
            skills: skills(&["JavaScript", "Node.js", "MongoDB", "Express"]),
            github_stars: 123,
            can_exit_vim: false,
            knows_go: false,
            debugs_in_production: true,
            interview_score: 70.0,
            cultural_fit_score: 75.0,
            technical_score: 68.0,
            status: ApplicantStatus::Applied,
            fun_fact: "console.log is a valid debugging strategy".to_string(),
            availability: "Immediate".to_string(),
            salary_expectation: "Startup equity".to_string(),
        },
        ApplicantInput {
            name: "Erik Larsson".to_string(),
            email: "erik@example.com".to_string(),
            position: "Senior Golang Developer".to_string(),
            years_experience: 8,
            skills: skills(&["Go", "gRPC", "Docker", "Kubernetes", "Terraform"]),
            github_stars: 890,
            can_exit_vim: true,
            knows_go: true,
            debugs_in_production: false,
            interview_score: 91.0,
            cultural_fit_score: 90.0,
            technical_score: 92.0,
            status: ApplicantStatus::Interviewed,
            fun_fact: "Almost as good as Jonathan, but not quite".to_string(),
            availability: "1 month".to_string(),
            salary_expectation: "Competitive".to_string(),
        },
    ]
}

/// Create every roster entry through the service. Individual failures are
/// logged and skipped; the number of created applicants is returned.
pub(crate) fn seed_applicants<R>(service: &ApplicantService<R>) -> usize
where
    R: ApplicantRepository + 'static,
{
    let roster = seed_roster();
    info!(count = roster.len(), "seeding applicants");

    let mut created = 0;
    for (index, input) in roster.iter().enumerate() {
        match service.create(input) {
            Ok(applicant) => {
                created += 1;
                info!(
                    id = applicant.id,
                    name = %applicant.name,
                    overall_score = applicant.overall_score,
                    "created applicant"
                );
            }
            Err(err) => warn!(index, name = %input.name, error = %err, "failed to create applicant"),
        }
    }
    created
}

pub(crate) struct DemoReport {
    pub(crate) ranking: Vec<ApplicantView>,
    pub(crate) best: BestApplicant,
}

/// Highest overall score first; equal scores keep the earlier applicant first.
pub(crate) fn rank(mut applicants: Vec<ApplicantView>) -> Vec<ApplicantView> {
    applicants.sort_by(|left, right| {
        right
            .overall_score
            .total_cmp(&left.overall_score)
            .then_with(|| left.id.cmp(&right.id))
    });
    applicants
}

pub(crate) fn build_demo_report(limit: usize) -> Result<DemoReport, AppError> {
    let service = ApplicantService::new(Arc::new(InMemoryApplicantRepository::default()));
    seed_applicants(&service);

    let page = service.list(&ListApplicantsRequest {
        limit: MAX_PAGE_LIMIT,
        ..ListApplicantsRequest::default()
    })?;
    let mut ranking = rank(page.applicants);
    ranking.truncate(limit);

    let best = service.get_best()?;
    Ok(DemoReport { ranking, best })
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let report = build_demo_report(args.limit)?;

    println!("Job applicants demo");
    println!("\nRanking by overall score");
    for (position, applicant) in report.ranking.iter().enumerate() {
        println!(
            "  {:>2}. {:<26} {:>6.2}  {:<20} {}",
            position + 1,
            applicant.name,
            applicant.overall_score,
            applicant.status.label(),
            applicant.skills.join(", ")
        );
    }

    println!("\nBest applicant: {}", report.best.applicant.name);
    println!("  {}", report.best.reason);
    Ok(())
}
