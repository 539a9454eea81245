pub mod guests;

pub use guests::GuestService;
