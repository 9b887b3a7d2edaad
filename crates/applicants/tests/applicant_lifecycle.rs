use std::sync::Arc;

use job_applicants::applicants::{
    ApplicantId, ApplicantInput, ApplicantService, ApplicantStatus, ErrorCode,
    InMemoryApplicantRepository, ListApplicantsRequest,
};

fn applicant(name: &str, email: &str, position: &str) -> ApplicantInput {
    ApplicantInput {
        name: name.to_string(),
        email: email.to_string(),
        position: position.to_string(),
        years_experience: 3,
        skills: vec!["Go".to_string(), "SQL".to_string()],
        github_stars: 42,
        knows_go: true,
        interview_score: 75.0,
        cultural_fit_score: 80.0,
        technical_score: 70.0,
        status: ApplicantStatus::Applied,
        ..ApplicantInput::default()
    }
}

fn service() -> ApplicantService<InMemoryApplicantRepository> {
    ApplicantService::new(Arc::new(InMemoryApplicantRepository::default()))
}

#[test]
fn full_lifecycle_keeps_store_and_views_consistent() {
    let service = service();

    let jane = service
        .create(&applicant("Jane Doe", "jane@example.com", "Backend Engineer"))
        .expect("jane created");
    let john = service
        .create(&applicant("John Roe", "john@example.com", "Frontend Engineer"))
        .expect("john created");
    assert_eq!((jane.id, john.id), (1, 2));

    // 70*0.4 + 75*0.3 + 80*0.3 = 74.5, minus 0.5 for undisclosed debugging, plus 1.5 experience.
    assert_eq!(jane.overall_score, 75.5);

    let promoted = ApplicantInput {
        status: ApplicantStatus::Interviewed,
        technical_score: 95.0,
        ..applicant("John Roe", "john@example.com", "Frontend Engineer")
    };
    let john = service
        .update(ApplicantId(john.id), &promoted)
        .expect("john updated");
    assert_eq!(john.status, ApplicantStatus::Interviewed);
    assert_eq!(john.overall_score, 85.5);

    let best = service.get_best().expect("best applicant");
    assert_eq!(best.applicant.id, john.id);

    let interviewed = service
        .list(&ListApplicantsRequest {
            status: ApplicantStatus::Interviewed,
            ..ListApplicantsRequest::default()
        })
        .expect("filtered list");
    assert_eq!(interviewed.total_count, 1);
    assert_eq!(interviewed.applicants[0].name, "John Roe");

    service.delete(ApplicantId(john.id)).expect("john deleted");
    let best = service.get_best().expect("best after delete");
    assert_eq!(best.applicant.id, jane.id);

    let remaining = service
        .list(&ListApplicantsRequest::default())
        .expect("list");
    assert_eq!(remaining.total_count, 1);
}

#[test]
fn email_can_be_reused_after_the_owner_is_deleted() {
    let service = service();
    let first = service
        .create(&applicant("Jane Doe", "jane@example.com", "Backend Engineer"))
        .expect("created");

    let err = service
        .create(&applicant("Jane Clone", "jane@example.com", "Backend Engineer"))
        .expect_err("duplicate email");
    assert_eq!(err.code(), ErrorCode::AlreadyExists);

    service.delete(ApplicantId(first.id)).expect("deleted");
    let second = service
        .create(&applicant("Jane Clone", "jane@example.com", "Backend Engineer"))
        .expect("email free again");
    assert_eq!(second.id, 2);
}

#[test]
fn min_score_filter_and_paging_agree_with_total_count() {
    let service = service();
    for index in 0..12 {
        let input = ApplicantInput {
            technical_score: f64::from(index * 8),
            ..applicant(
                &format!("Applicant {index}"),
                &format!("applicant{index}@example.com"),
                "Platform Engineer",
            )
        };
        service.create(&input).expect("created");
    }

    let strong = service
        .list(&ListApplicantsRequest {
            min_score: 70.0,
            limit: 2,
            ..ListApplicantsRequest::default()
        })
        .expect("list");
    assert!(strong.total_count > 2);
    assert_eq!(strong.applicants.len(), 2);
    assert!(strong
        .applicants
        .iter()
        .all(|view| view.overall_score >= 70.0));

    let beyond = service
        .list(&ListApplicantsRequest {
            offset: 50,
            ..ListApplicantsRequest::default()
        })
        .expect("list past the end");
    assert!(beyond.applicants.is_empty());
    assert_eq!(beyond.total_count, 12);
}
