use backend_test_support::unique_helpers::unknown_invite_guid;
use wedding_backend::errors::domain::{DomainError, NotFoundKind};
use wedding_backend::repos::StatusName;
use wedding_backend::Envelope;

use crate::support::fixtures::{JONAS_GUID, JONAS_ID, MARIA_GUID};
use crate::support::stores::both_services;

#[tokio::test]
async fn jonas_invitation_is_joined_with_related_records() {
    for (backend, service) in both_services().await {
        let details = service
            .get_guest_invitation(JONAS_GUID)
            .await
            .unwrap_or_else(|e| panic!("{backend}: lookup failed: {e}"));

        assert_eq!(details.invitation.id, JONAS_ID, "{backend}");
        assert_eq!(details.invitation.guest_full_name, "Jonas Petraitis", "{backend}");
        assert_eq!(details.invitation.guest_call, "Jonas", "{backend}");
        assert_eq!(details.invitation.guest_language, "LT", "{backend}");

        let country = details.countries.expect("Jonas flies from a seeded country");
        assert_eq!(country.country_code, "LT", "{backend}");
        assert_eq!(country.country_name_en, "Lithuania", "{backend}");

        let status = details.invitation_status.expect("seeded status");
        assert_eq!(status.status_name, StatusName::Pending, "{backend}");

        assert!(details.guest_responses.is_none(), "{backend}: no response yet");
    }
}

#[tokio::test]
async fn seeded_status_other_than_pending_is_reported() {
    for (backend, service) in both_services().await {
        let details = service.get_guest_invitation(MARIA_GUID).await.unwrap();
        assert_eq!(
            details.invitation_status.map(|s| s.status_name),
            Some(StatusName::Accepted),
            "{backend}"
        );
        assert_eq!(
            details.countries.map(|c| c.country_code).as_deref(),
            Some("DE"),
            "{backend}"
        );
    }
}

#[tokio::test]
async fn unknown_token_is_guest_not_found() {
    for (backend, service) in both_services().await {
        let err = service
            .get_guest_invitation(&unknown_invite_guid())
            .await
            .expect_err("unknown token must not resolve");
        assert!(
            matches!(err, DomainError::NotFound(NotFoundKind::Guest, _)),
            "{backend}: {err:?}"
        );
        assert_eq!(err.to_string(), "Guest not found", "{backend}");
    }
}

#[tokio::test]
async fn empty_token_is_guest_not_found() {
    for (backend, service) in both_services().await {
        let err = service.get_guest_invitation("").await.unwrap_err();
        assert!(
            matches!(err, DomainError::NotFound(NotFoundKind::Guest, _)),
            "{backend}: {err:?}"
        );
    }
}

#[tokio::test]
async fn lookup_result_converts_to_envelope() {
    for (backend, service) in both_services().await {
        let found = Envelope::from(service.get_guest_invitation(JONAS_GUID).await);
        assert!(found.data.is_some() && found.error.is_none(), "{backend}");

        let missing = Envelope::from(service.get_guest_invitation("missing").await);
        assert!(missing.data.is_none(), "{backend}");
        let error = missing.error.expect("error populated");
        assert_eq!(error.code, "GUEST_NOT_FOUND", "{backend}");
        assert_eq!(error.message, "Guest not found", "{backend}");
    }
}
