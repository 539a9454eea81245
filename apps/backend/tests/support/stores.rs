//! Fresh, seeded guest stores for tests.
//!
//! Every call opens an isolated store: the local one over its own in-memory
//! map, the remote one over its own `sqlite::memory:` database.

use std::sync::Arc;

use wedding_backend::adapters::{GuestStoreLocal, GuestStoreSea};
use wedding_backend::infra::db::connect_and_migrate;
use wedding_backend::services::GuestService;
use wedding_backend::storage::MemoryKvStore;

pub struct LocalFixture {
    pub kv: Arc<MemoryKvStore>,
    pub store: Arc<GuestStoreLocal>,
}

impl LocalFixture {
    pub fn service(&self) -> GuestService {
        GuestService::new(self.store.clone())
    }
}

/// Local store over an empty map. Seeding happens on first access.
pub fn local_fixture() -> LocalFixture {
    let kv = Arc::new(MemoryKvStore::new());
    let store = Arc::new(GuestStoreLocal::new(kv.clone()));
    LocalFixture { kv, store }
}

pub fn local_service() -> GuestService {
    local_fixture().service()
}

pub async fn sea_store() -> Arc<GuestStoreSea> {
    let conn = connect_and_migrate("sqlite::memory:")
        .await
        .expect("in-memory remote store should migrate");
    Arc::new(GuestStoreSea::new(conn))
}

pub async fn sea_service() -> GuestService {
    GuestService::new(sea_store().await)
}

/// One service per backend, labelled for assertion messages.
pub async fn both_services() -> Vec<(&'static str, GuestService)> {
    vec![("local", local_service()), ("remote", sea_service().await)]
}

/// Rows of one local table as raw JSON values.
pub fn local_rows(kv: &MemoryKvStore, key: &str) -> Vec<serde_json::Value> {
    use wedding_backend::storage::KvStore;

    kv.get(key)
        .expect("memory store reads do not fail")
        .map(|raw| serde_json::from_str(&raw).expect("local table should be a JSON array"))
        .unwrap_or_default()
}
