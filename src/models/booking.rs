use serde::{Deserialize, Serialize};

/// One entry in the append-only appointment log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub doctor_id: i64,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub patient_email: Option<String>,
}

/// A doctor id as clients send it. Any JSON value is accepted here; only
/// integers, integral floats and numeric strings resolve to an id.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DoctorRef {
    Number(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl DoctorRef {
    pub fn id(&self) -> Option<i64> {
        match self {
            DoctorRef::Number(n) => Some(*n),
            DoctorRef::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            DoctorRef::Float(_) | DoctorRef::Other(_) => None,
            DoctorRef::Text(s) => parse_doctor_id(s),
        }
    }
}

/// Strict integer parse. Anything else never matches a doctor.
pub fn parse_doctor_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub doctor_id: Option<DoctorRef>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub patient_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctor_ref_accepts_number_and_numeric_string() {
        let req: BookingRequest =
            serde_json::from_str(r#"{"doctorId":3,"date":"2024-01-01","time":"09:00"}"#).unwrap();
        assert_eq!(req.doctor_id.and_then(|d| d.id()), Some(3));

        let req: BookingRequest = serde_json::from_str(r#"{"doctorId":"7"}"#).unwrap();
        assert_eq!(req.doctor_id.and_then(|d| d.id()), Some(7));
    }

    #[test]
    fn test_doctor_ref_rejects_garbage() {
        let req: BookingRequest = serde_json::from_str(r#"{"doctorId":"abc"}"#).unwrap();
        assert_eq!(req.doctor_id.and_then(|d| d.id()), None);
        assert_eq!(parse_doctor_id("12abc"), None);
        assert_eq!(parse_doctor_id(" 4 "), Some(4));

        for body in [
            r#"{"doctorId":true}"#,
            r#"{"doctorId":[1]}"#,
            r#"{"doctorId":{"id":1}}"#,
            r#"{"doctorId":1.5}"#,
        ] {
            let req: BookingRequest = serde_json::from_str(body).unwrap();
            assert_eq!(req.doctor_id.and_then(|d| d.id()), None, "{body}");
        }
    }

    #[test]
    fn test_doctor_ref_integral_float() {
        let req: BookingRequest = serde_json::from_str(r#"{"doctorId":2.0}"#).unwrap();
        assert_eq!(req.doctor_id.and_then(|d| d.id()), Some(2));
    }

    #[test]
    fn test_appointment_serializes_camel_case() {
        let appt = Appointment {
            doctor_id: 1,
            doctor_name: "Dr. Salem".to_string(),
            date: "2024-01-01".to_string(),
            time: "09:00".to_string(),
            service: "cleaning".to_string(),
            patient_email: Some("patient@example.com".to_string()),
        };
        let json = serde_json::to_value(&appt).unwrap();
        assert_eq!(json["doctorId"], 1);
        assert_eq!(json["doctorName"], "Dr. Salem");
        assert_eq!(json["patientEmail"], "patient@example.com");
    }
}
