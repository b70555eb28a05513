use crate::errors::AppError;
use crate::models::{ProcedureTable, QueueEntry, QueueRegistration, QueueTicket};

use super::filled;

/// FIFO list of walk-in patients. Entries are never removed.
#[derive(Debug)]
pub struct WalkInQueue {
    procedures: ProcedureTable,
    entries: Vec<QueueEntry>,
}

impl WalkInQueue {
    pub fn new(procedures: ProcedureTable) -> Self {
        Self {
            procedures,
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, req: QueueRegistration) -> Result<QueueTicket, AppError> {
        let (Some(name), Some(procedure)) = (filled(req.name), filled(req.procedure)) else {
            return Err(AppError::MissingFields("Name and procedure are required."));
        };
        let duration = self
            .procedures
            .duration_of(&procedure)
            .ok_or(AppError::InvalidProcedure)?;

        let people_ahead = self.entries.len();
        let waiting_time: u32 = self.entries.iter().map(|e| e.duration).sum();

        self.entries.push(QueueEntry {
            name,
            procedure,
            duration,
        });

        let ticket = QueueTicket {
            position: people_ahead + 1,
            people_ahead,
            waiting_time,
            duration,
        };
        tracing::info!(
            position = ticket.position,
            waiting_time = ticket.waiting_time,
            "patient queued"
        );
        Ok(ticket)
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str, procedure: &str) -> QueueRegistration {
        QueueRegistration {
            name: Some(name.to_string()),
            procedure: Some(procedure.to_string()),
        }
    }

    #[test]
    fn test_register_accumulates_wait() {
        let mut queue = WalkInQueue::new(ProcedureTable::standard());

        let alice = queue.register(registration("Alice", "خلع")).unwrap();
        assert_eq!(
            alice,
            QueueTicket {
                position: 1,
                people_ahead: 0,
                waiting_time: 0,
                duration: 30,
            }
        );

        let bob = queue.register(registration("Bob", "حشو")).unwrap();
        assert_eq!(
            bob,
            QueueTicket {
                position: 2,
                people_ahead: 1,
                waiting_time: 30,
                duration: 20,
            }
        );

        let carol = queue.register(registration("Carol", "تنظيف")).unwrap();
        assert_eq!(carol.position, 3);
        assert_eq!(carol.waiting_time, 50);

        let names: Vec<&str> = queue.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_invalid_procedure_does_not_enqueue() {
        let mut queue = WalkInQueue::new(ProcedureTable::standard());
        queue.register(registration("Alice", "خلع")).unwrap();

        let err = queue.register(registration("Bob", "surgery")).unwrap_err();
        assert!(matches!(err, AppError::InvalidProcedure));
        assert_eq!(queue.entries().len(), 1);
    }

    #[test]
    fn test_missing_fields() {
        let mut queue = WalkInQueue::new(ProcedureTable::standard());
        let err = queue
            .register(QueueRegistration {
                name: Some("Alice".to_string()),
                procedure: None,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::MissingFields(_)));

        let err = queue.register(registration("", "خلع")).unwrap_err();
        assert!(matches!(err, AppError::MissingFields(_)));
        assert!(queue.entries().is_empty());
    }
}
