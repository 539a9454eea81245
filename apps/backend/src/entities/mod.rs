pub mod countries;
pub mod guest_activities;
pub mod guest_invitations;
pub mod guest_responses;
pub mod invitation_status;

pub use countries::Entity as Countries;
pub use guest_activities::Entity as GuestActivities;
pub use guest_invitations::Entity as GuestInvitations;
pub use guest_responses::Entity as GuestResponses;
pub use invitation_status::Entity as InvitationStatuses;
