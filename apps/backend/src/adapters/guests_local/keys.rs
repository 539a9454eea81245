//! Fixed storage keys of the local store.

pub const COUNTRIES: &str = "countries";
pub const INVITATION_STATUS: &str = "invitation_status";
pub const GUEST_INVITATIONS: &str = "guest_invitations";
pub const GUEST_RESPONSES: &str = "guest_responses";
pub const GUEST_ACTIVITIES: &str = "guest_activities";

/// Set to `"true"` once the seed has been written.
pub const INITIALIZED: &str = "wedding_db_initialized";

pub const ALL_TABLES: [&str; 5] = [
    COUNTRIES,
    INVITATION_STATUS,
    GUEST_INVITATIONS,
    GUEST_RESPONSES,
    GUEST_ACTIVITIES,
];
