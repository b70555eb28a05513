use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub time: String,
    pub service: String,
    pub booked: bool,
    pub patient_email: Option<String>,
}

impl TimeSlot {
    pub fn open(time: &str, service: &str) -> Self {
        Self {
            time: time.to_string(),
            service: service.to_string(),
            booked: false,
            patient_email: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub services: Vec<String>,
    /// Slots keyed by date string, each list kept in insertion order.
    pub schedule: BTreeMap<String, Vec<TimeSlot>>,
}

impl Doctor {
    pub fn offers(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    pub fn summary(&self) -> DoctorSummary {
        DoctorSummary {
            id: self.id,
            name: self.name.clone(),
            services: self.services.clone(),
        }
    }
}

/// Public view of a doctor; the schedule stays private because it carries
/// patient emails.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DoctorSummary {
    pub id: i64,
    pub name: String,
    pub services: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewDoctor {
    pub name: Option<String>,
    pub services: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct NewTimeslots {
    pub date: Option<String>,
    pub times: Option<Vec<String>>,
    pub service: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TimeslotsAdded {
    pub message: &'static str,
    pub schedule: Vec<TimeSlot>,
}

#[derive(Debug, Deserialize)]
pub struct AvailableQuery {
    pub date: Option<String>,
}
