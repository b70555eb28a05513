use crate::errors::AppError;
use crate::models::{
    Appointment, BookingRequest, Doctor, DoctorSummary, NewDoctor, NewTimeslots, TimeSlot,
};

use super::filled;

/// In-memory store for doctors, their schedules and the appointment log.
#[derive(Debug)]
pub struct Directory {
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    next_doctor_id: i64,
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            doctors: Vec::new(),
            appointments: Vec::new(),
            next_doctor_id: 1,
        }
    }
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_doctor(&mut self, req: NewDoctor) -> Result<Doctor, AppError> {
        let (Some(name), Some(services)) = (filled(req.name), req.services) else {
            return Err(AppError::MissingFields("Name and services are required."));
        };

        let doctor = Doctor {
            id: self.next_doctor_id,
            name,
            services,
            schedule: Default::default(),
        };
        self.next_doctor_id += 1;
        self.doctors.push(doctor.clone());

        tracing::info!(doctor_id = doctor.id, name = %doctor.name, "doctor registered");
        Ok(doctor)
    }

    /// Adds open slots for `date`, skipping times that already exist there.
    /// Returns the full slot list for the date after the update.
    pub fn add_timeslots(
        &mut self,
        doctor_id: i64,
        req: NewTimeslots,
    ) -> Result<Vec<TimeSlot>, AppError> {
        let doctor = self.doctor_mut(doctor_id)?;

        let (Some(date), Some(times), Some(service)) =
            (filled(req.date), req.times, filled(req.service))
        else {
            return Err(AppError::MissingFields(
                "Date, times, and service are required.",
            ));
        };

        if !doctor.offers(&service) {
            return Err(AppError::ServiceNotRegistered);
        }

        let slots = doctor.schedule.entry(date.clone()).or_default();
        let before = slots.len();
        for time in &times {
            if !slots.iter().any(|slot| &slot.time == time) {
                slots.push(TimeSlot::open(time, &service));
            }
        }

        tracing::info!(
            doctor_id,
            date = %date,
            added = slots.len() - before,
            "timeslots added"
        );
        Ok(slots.clone())
    }

    pub fn list_doctors(&self) -> Vec<DoctorSummary> {
        self.doctors.iter().map(Doctor::summary).collect()
    }

    pub fn available_slots(
        &self,
        doctor_id: i64,
        date: Option<&str>,
    ) -> Result<Vec<TimeSlot>, AppError> {
        let doctor = self.doctor(doctor_id)?;
        let date = date
            .filter(|d| !d.is_empty())
            .ok_or(AppError::MissingDate)?;

        Ok(doctor
            .schedule
            .get(date)
            .map(|slots| slots.iter().filter(|s| !s.booked).cloned().collect())
            .unwrap_or_default())
    }

    /// Claims a slot for a patient and records the appointment.
    pub fn book(&mut self, req: BookingRequest) -> Result<Appointment, AppError> {
        let doctor_id = req
            .doctor_id
            .as_ref()
            .and_then(|d| d.id())
            .ok_or(AppError::DoctorNotFound)?;
        let doctor = self.doctor_mut(doctor_id)?;
        let doctor_name = doctor.name.clone();

        let date = req.date.unwrap_or_default();
        let slots = doctor
            .schedule
            .get_mut(&date)
            .ok_or(AppError::NoAvailability)?;

        let time = req.time.unwrap_or_default();
        let slot = slots
            .iter_mut()
            .find(|s| s.time == time)
            .ok_or(AppError::SlotNotFound)?;

        if slot.booked {
            return Err(AppError::AlreadyBooked);
        }

        slot.booked = true;
        slot.patient_email = req.patient_email.clone();

        let appointment = Appointment {
            doctor_id,
            doctor_name,
            date,
            time,
            service: slot.service.clone(),
            patient_email: req.patient_email,
        };
        self.appointments.push(appointment.clone());

        tracing::info!(
            doctor_id,
            date = %appointment.date,
            time = %appointment.time,
            "appointment booked"
        );
        Ok(appointment)
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    fn doctor(&self, id: i64) -> Result<&Doctor, AppError> {
        self.doctors
            .iter()
            .find(|d| d.id == id)
            .ok_or(AppError::DoctorNotFound)
    }

    fn doctor_mut(&mut self, id: i64) -> Result<&mut Doctor, AppError> {
        self.doctors
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(AppError::DoctorNotFound)
    }
}
