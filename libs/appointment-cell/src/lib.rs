// =====================================================================================
// APPOINTMENT CELL - SCAN BOOKINGS
// =====================================================================================
//
// In-memory booking flow for the voice assistant and technician dashboard:
// - Slot availability (stub, always available)
// - Booking under a strict or lenient payload policy
// - Newest-first appointment listing
//
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use handlers::AppointmentHandlers;
pub use models::{
    Appointment, AppointmentError, BookAppointmentRequest, BookingConfirmation, StrictBookingPayload,
};
pub use router::appointment_routes;
pub use services::{AppointmentBookingService, AppointmentStore, AvailabilityService};
