pub mod availability;
pub mod booking;
pub mod store;

pub use availability::AvailabilityService;
pub use booking::AppointmentBookingService;
pub use store::AppointmentStore;
