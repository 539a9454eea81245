use std::sync::Arc;

use wedding_backend::adapters::guests_local::keys;
use wedding_backend::adapters::{GuestStoreLocal, InitOutcome};
use wedding_backend::repos::StatusName;
use wedding_backend::services::GuestService;
use wedding_backend::storage::{FileKvStore, KvStore};

use crate::support::fixtures::{full_submission, JONAS_GUID, JONAS_ID};

fn open(dir: &std::path::Path) -> (Arc<GuestStoreLocal>, GuestService) {
    let kv = FileKvStore::open(dir).expect("temp dir is writable");
    let store = Arc::new(GuestStoreLocal::new(Arc::new(kv)));
    (store.clone(), GuestService::new(store))
}

#[tokio::test]
async fn data_survives_reopening_the_directory() {
    let dir = tempfile::tempdir().unwrap();

    {
        let (store, service) = open(dir.path());
        assert_eq!(store.initialize().unwrap(), InitOutcome::Seeded);
        service.update_guest_status(JONAS_GUID, "accepted").await.unwrap();
        service
            .submit_guest_response(JONAS_ID, full_submission())
            .await
            .unwrap();
    }

    let (store, service) = open(dir.path());
    assert_eq!(store.initialize().unwrap(), InitOutcome::AlreadyInitialized);

    let details = service.get_guest_invitation(JONAS_GUID).await.unwrap();
    assert_eq!(
        details.invitation_status.map(|s| s.status_name),
        Some(StatusName::Accepted)
    );
    assert!(details.invitation.updated_at.is_some());
    assert_eq!(details.guest_responses.unwrap().days_in_vietnam, Some(10));
}

#[test]
fn each_key_is_one_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _) = open(dir.path());
    store.initialize().unwrap();

    for key in keys::ALL_TABLES {
        let path = dir.path().join(format!("{key}.json"));
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with('['), "{key} should hold a JSON array");
    }
    let sentinel = dir.path().join(format!("{}.json", keys::INITIALIZED));
    assert_eq!(std::fs::read_to_string(sentinel).unwrap(), "true");
}

#[test]
fn file_store_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let kv = FileKvStore::open(dir.path()).unwrap();
    assert!(kv.set("../escape", "x").is_err());
    assert!(kv.get("a/b").is_err());
    assert_eq!(kv.get("never_written").unwrap(), None);
}
