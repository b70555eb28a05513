use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueEntry {
    pub name: String,
    pub procedure: String,
    /// Minutes, copied from the procedure table when the patient registered.
    pub duration: u32,
}

#[derive(Debug, Deserialize)]
pub struct QueueRegistration {
    pub name: Option<String>,
    pub procedure: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueueTicket {
    pub position: usize,
    pub people_ahead: usize,
    pub waiting_time: u32,
    pub duration: u32,
}

/// Fixed procedure durations in minutes.
#[derive(Debug, Clone)]
pub struct ProcedureTable {
    entries: Vec<(String, u32)>,
}

impl ProcedureTable {
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ("خلع".to_string(), 30),
                ("حشو".to_string(), 20),
                ("تنظيف".to_string(), 15),
            ],
        }
    }

    pub fn duration_of(&self, procedure: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == procedure)
            .map(|(_, minutes)| *minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_durations() {
        let table = ProcedureTable::standard();
        assert_eq!(table.duration_of("خلع"), Some(30));
        assert_eq!(table.duration_of("حشو"), Some(20));
        assert_eq!(table.duration_of("تنظيف"), Some(15));
        assert_eq!(table.duration_of("surgery"), None);
    }

    #[test]
    fn test_ticket_serializes_camel_case() {
        let ticket = QueueTicket {
            position: 2,
            people_ahead: 1,
            waiting_time: 30,
            duration: 20,
        };
        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["peopleAhead"], 1);
        assert_eq!(json["waitingTime"], 30);
    }
}
