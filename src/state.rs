use std::sync::{Mutex, MutexGuard};

use crate::models::{ProcedureTable, User};
use crate::services::queue::WalkInQueue;
use crate::services::scheduling::Directory;

/// Shared context for the booking service. Each read-modify-write on the
/// directory runs under a single lock acquisition.
pub struct BookingState {
    pub users: Vec<User>,
    pub directory: Mutex<Directory>,
}

impl BookingState {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            directory: Mutex::new(Directory::new()),
        }
    }

    pub fn directory(&self) -> MutexGuard<'_, Directory> {
        self.directory.lock().unwrap_or_else(|e| e.into_inner())
    }
}

pub struct QueueState {
    pub queue: Mutex<WalkInQueue>,
}

impl QueueState {
    pub fn new(procedures: ProcedureTable) -> Self {
        Self {
            queue: Mutex::new(WalkInQueue::new(procedures)),
        }
    }

    pub fn queue(&self) -> MutexGuard<'_, WalkInQueue> {
        self.queue.lock().unwrap_or_else(|e| e.into_inner())
    }
}
