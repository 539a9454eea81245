//! Unique test values, so tests sharing a store never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Invite token that no seeded invitation carries.
pub fn unknown_invite_guid() -> String {
    unique_str("missing-invite")
}

/// Activity label unique to the calling test.
pub fn unique_activity_type(prefix: &str) -> String {
    unique_str(prefix).to_lowercase()
}
