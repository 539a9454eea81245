use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, Set,
};
use time::OffsetDateTime;
use wedding_backend::entities::{guest_invitations, guest_responses};
use wedding_backend::errors::domain::{DomainError, InfraErrorKind};
use wedding_backend::infra::db_errors::map_db_err;
use wedding_backend::repos::{GuestStore, NewActivity};

use crate::support::fixtures::{
    full_submission, revised_submission, JONAS_GUID, JONAS_ID, UNKNOWN_GUEST_ID,
};
use crate::support::stores::sea_store;

fn integrity_detail(err: DomainError) -> String {
    match err {
        DomainError::Infra(InfraErrorKind::IntegrityViolation, detail) => detail,
        other => panic!("expected integrity violation, got {other:?}"),
    }
}

#[tokio::test]
async fn duplicate_invite_token_is_rejected_by_the_schema() {
    let store = sea_store().await;
    let duplicate = guest_invitations::ActiveModel {
        id: NotSet,
        invite_guid: Set(JONAS_GUID.to_string()),
        guest_full_name: Set("Jonas Impostor".into()),
        guest_call: Set("Jonas".into()),
        guest_language: Set("LT".into()),
        fly_from: Set(1),
        status_id: Set(1),
        created_at: Set(OffsetDateTime::now_utc()),
        updated_at: Set(None),
    };

    let err = duplicate.insert(store.connection()).await.unwrap_err();
    assert_eq!(integrity_detail(map_db_err(err)), "Unique constraint violation");
}

#[tokio::test]
async fn second_plain_insert_for_a_guest_hits_the_unique_index() {
    let store = sea_store().await;
    let row = || guest_responses::ActiveModel {
        id: NotSet,
        guest_id: Set(JONAS_ID),
        days_in_vietnam: Set(None),
        flight_ticket_date: Set(None),
        days_before_wedding: Set(None),
        coming_with: Set(None),
        submitted_at: Set(OffsetDateTime::now_utc()),
    };

    row().insert(store.connection()).await.unwrap();
    let err = row().insert(store.connection()).await.unwrap_err();
    assert_eq!(integrity_detail(map_db_err(err)), "Unique constraint violation");
}

#[tokio::test]
async fn upsert_keeps_one_row_and_its_id() {
    let store = sea_store().await;
    let now = OffsetDateTime::now_utc();

    let first = store
        .upsert_response(JONAS_ID, full_submission(), now)
        .await
        .unwrap();
    let second = store
        .upsert_response(JONAS_ID, revised_submission(), now)
        .await
        .unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.days_in_vietnam, Some(14));

    let rows = guest_responses::Entity::find()
        .filter(guest_responses::Column::GuestId.eq(JONAS_ID))
        .count(store.connection())
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn writes_for_unknown_guests_hit_foreign_keys() {
    let store = sea_store().await;
    let now = OffsetDateTime::now_utc();

    let err = store
        .upsert_response(UNKNOWN_GUEST_ID, full_submission(), now)
        .await
        .unwrap_err();
    assert_eq!(integrity_detail(err), "Foreign key constraint violation");

    let err = store
        .insert_activity(UNKNOWN_GUEST_ID, NewActivity::new("page_view"), now)
        .await
        .unwrap_err();
    assert_eq!(integrity_detail(err), "Foreign key constraint violation");
}

#[tokio::test]
async fn status_update_for_unknown_token_touches_no_row() {
    let store = sea_store().await;
    let updated = store
        .update_invitation_status("no-such-invite", 2, OffsetDateTime::now_utc())
        .await
        .unwrap();
    assert!(updated.is_none());

    let touched = guest_invitations::Entity::find()
        .filter(guest_invitations::Column::UpdatedAt.is_not_null())
        .count(store.connection())
        .await
        .unwrap();
    assert_eq!(touched, 0);
}

#[tokio::test]
async fn ping_reaches_the_database() {
    let store = sea_store().await;
    store.ping().await.unwrap();
}
