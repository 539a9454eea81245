pub mod guest_id;
pub mod validated_json;

pub use guest_id::GuestId;
pub use validated_json::ValidatedJson;
