use wedding_backend::errors::domain::{DomainError, NotFoundKind};
use wedding_backend::repos::StatusName;

use crate::support::fixtures::{JONAS_GUID, SARAH_GUID};
use crate::support::stores::both_services;

#[tokio::test]
async fn every_status_name_round_trips() {
    for (backend, service) in both_services().await {
        for name in StatusName::ALL {
            let updated = service
                .update_guest_status(SARAH_GUID, name.as_str())
                .await
                .unwrap_or_else(|e| panic!("{backend}: update to {name} failed: {e}"));
            assert!(updated.updated_at.is_some(), "{backend}: updated_at set");

            let details = service.get_guest_invitation(SARAH_GUID).await.unwrap();
            assert_eq!(
                details.invitation_status.map(|s| s.status_name),
                Some(name),
                "{backend}"
            );
            assert_eq!(details.invitation.status_id, updated.status_id, "{backend}");
        }
    }
}

#[tokio::test]
async fn update_returns_the_stored_invitation() {
    for (backend, service) in both_services().await {
        let before = service.get_guest_invitation(JONAS_GUID).await.unwrap();
        let updated = service
            .update_guest_status(JONAS_GUID, "accepted")
            .await
            .unwrap();

        assert_eq!(updated.id, before.invitation.id, "{backend}");
        assert_eq!(updated.invite_guid, JONAS_GUID, "{backend}");
        assert_eq!(updated.created_at, before.invitation.created_at, "{backend}");
        assert_ne!(updated.status_id, before.invitation.status_id, "{backend}");
    }
}

#[tokio::test]
async fn unknown_status_leaves_invitation_unchanged() {
    for (backend, service) in both_services().await {
        let before = service.get_guest_invitation(JONAS_GUID).await.unwrap();

        for bad in ["maybe", "Accepted", " pending", ""] {
            let err = service
                .update_guest_status(JONAS_GUID, bad)
                .await
                .expect_err("status must not resolve");
            assert!(
                matches!(err, DomainError::NotFound(NotFoundKind::Status, _)),
                "{backend}: {bad:?} gave {err:?}"
            );
            assert_eq!(err.to_string(), "Status not found", "{backend}");
        }

        let after = service.get_guest_invitation(JONAS_GUID).await.unwrap();
        assert_eq!(after, before, "{backend}: invitation must be untouched");
    }
}

#[tokio::test]
async fn unknown_token_with_valid_status_is_guest_not_found() {
    for (backend, service) in both_services().await {
        let err = service
            .update_guest_status("no-such-invite", "rejected")
            .await
            .unwrap_err();
        assert!(
            matches!(err, DomainError::NotFound(NotFoundKind::Guest, _)),
            "{backend}: {err:?}"
        );
    }
}

#[tokio::test]
async fn updating_one_guest_does_not_touch_others() {
    for (backend, service) in both_services().await {
        let sarah_before = service.get_guest_invitation(SARAH_GUID).await.unwrap();
        service
            .update_guest_status(JONAS_GUID, "rejected")
            .await
            .unwrap();
        let sarah_after = service.get_guest_invitation(SARAH_GUID).await.unwrap();
        assert_eq!(sarah_after, sarah_before, "{backend}");
    }
}
