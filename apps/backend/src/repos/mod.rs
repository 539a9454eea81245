//! Domain records and the persistence capability shared by both guest stores.

pub mod activities;
pub mod countries;
pub mod guest_store;
pub mod invitations;
pub mod responses;
pub mod statuses;

pub use activities::{ActivityData, GuestActivity, NewActivity};
pub use countries::Country;
pub use guest_store::GuestStore;
pub use invitations::{GuestInvitation, GuestInvitationDetails};
pub use responses::{GuestResponse, ResponseSubmission};
pub use statuses::{InvitationStatus, StatusName};

time::serde::format_description!(ticket_date, Date, "[year]-[month]-[day]");
