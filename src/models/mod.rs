pub mod booking;
pub mod doctor;
pub mod queue;
pub mod user;

pub use booking::{parse_doctor_id, Appointment, BookingRequest, DoctorRef};
pub use doctor::{
    AvailableQuery, Doctor, DoctorSummary, NewDoctor, NewTimeslots, TimeSlot, TimeslotsAdded,
};
pub use queue::{ProcedureTable, QueueEntry, QueueRegistration, QueueTicket};
pub use user::{LoginRequest, LoginResponse, Role, User};
