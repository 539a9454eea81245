use time::macros::date;
use wedding_backend::errors::domain::{DomainError, InfraErrorKind};
use wedding_backend::repos::ResponseSubmission;

use crate::support::fixtures::{
    full_submission, revised_submission, JONAS_GUID, JONAS_ID, SARAH_ID, UNKNOWN_GUEST_ID,
};
use crate::support::stores::both_services;

#[tokio::test]
async fn submitted_response_appears_on_lookup() {
    for (backend, service) in both_services().await {
        let stored = service
            .submit_guest_response(JONAS_ID, full_submission())
            .await
            .unwrap_or_else(|e| panic!("{backend}: submit failed: {e}"));
        assert_eq!(stored.guest_id, JONAS_ID, "{backend}");
        assert_eq!(stored.flight_ticket_date, Some(date!(2026 - 03 - 14)), "{backend}");

        let details = service.get_guest_invitation(JONAS_GUID).await.unwrap();
        let response = details.guest_responses.expect("response joined");
        assert_eq!(response, stored, "{backend}");
    }
}

#[tokio::test]
async fn second_submission_replaces_the_first() {
    for (backend, service) in both_services().await {
        service
            .submit_guest_response(JONAS_ID, full_submission())
            .await
            .unwrap();
        let second = service
            .submit_guest_response(JONAS_ID, revised_submission())
            .await
            .unwrap();

        let revised = revised_submission();
        assert_eq!(second.days_in_vietnam, revised.days_in_vietnam, "{backend}");
        assert_eq!(second.flight_ticket_date, None, "{backend}");
        assert_eq!(second.days_before_wedding, revised.days_before_wedding, "{backend}");
        assert_eq!(second.coming_with, None, "{backend}");

        let details = service.get_guest_invitation(JONAS_GUID).await.unwrap();
        assert_eq!(details.guest_responses, Some(second), "{backend}");
    }
}

#[tokio::test]
async fn empty_submission_is_stored_with_all_fields_unset() {
    for (backend, service) in both_services().await {
        let stored = service
            .submit_guest_response(SARAH_ID, ResponseSubmission::default())
            .await
            .unwrap();
        assert_eq!(stored.days_in_vietnam, None, "{backend}");
        assert_eq!(stored.flight_ticket_date, None, "{backend}");
        assert_eq!(stored.days_before_wedding, None, "{backend}");
        assert_eq!(stored.coming_with, None, "{backend}");
    }
}

#[tokio::test]
async fn responses_are_kept_per_guest() {
    for (backend, service) in both_services().await {
        let jonas = service
            .submit_guest_response(JONAS_ID, full_submission())
            .await
            .unwrap();
        let sarah = service
            .submit_guest_response(SARAH_ID, revised_submission())
            .await
            .unwrap();
        assert_ne!(jonas.id, sarah.id, "{backend}");
        assert_eq!(jonas.guest_id, JONAS_ID, "{backend}");
        assert_eq!(sarah.guest_id, SARAH_ID, "{backend}");
    }
}

#[tokio::test]
async fn unknown_guest_is_an_integrity_violation() {
    for (backend, service) in both_services().await {
        let err = service
            .submit_guest_response(UNKNOWN_GUEST_ID, full_submission())
            .await
            .expect_err("response for a missing guest must be rejected");
        assert!(
            matches!(err, DomainError::Infra(InfraErrorKind::IntegrityViolation, _)),
            "{backend}: {err:?}"
        );
    }
}
