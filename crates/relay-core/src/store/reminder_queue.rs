use crate::Reminder;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Unordered, ever-growing reminder queue.
///
/// Records are appended in submission order and never removed; delivery
/// flips `sent` once. The queue lives in process memory only - everything
/// is lost on restart, due or not.
pub struct ReminderQueue {
    reminders: Mutex<Vec<Reminder>>,
}

impl ReminderQueue {
    pub fn new() -> Self {
        Self {
            reminders: Mutex::new(Vec::new()),
        }
    }

    /// Append a reminder. Field validation happens at the API boundary;
    /// by the time a Reminder exists it is accepted as-is.
    pub async fn submit(&self, reminder: Reminder) -> Uuid {
        let id = reminder.id;
        self.reminders.lock().await.push(reminder);
        id
    }

    /// All unsent reminders due at `now`, in insertion order.
    /// Returns clones so no lock is held while deliveries run.
    pub async fn due_unsent(&self, now: DateTime<Utc>) -> Vec<Reminder> {
        self.reminders
            .lock()
            .await
            .iter()
            .filter(|reminder| reminder.is_due(now))
            .cloned()
            .collect()
    }

    /// Mark a reminder delivered. Returns false if the id is unknown.
    pub async fn mark_sent(&self, id: Uuid) -> bool {
        let mut reminders = self.reminders.lock().await;

        match reminders.iter_mut().find(|reminder| reminder.id == id) {
            Some(reminder) => {
                reminder.sent = true;
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.reminders.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reminders.lock().await.is_empty()
    }

    /// Unsent count, due or not (health reporting)
    pub async fn pending_count(&self) -> usize {
        self.reminders
            .lock()
            .await
            .iter()
            .filter(|reminder| !reminder.sent)
            .count()
    }

    /// Snapshot a reminder by id (test and health inspection)
    pub async fn get(&self, id: Uuid) -> Option<Reminder> {
        self.reminders
            .lock()
            .await
            .iter()
            .find(|reminder| reminder.id == id)
            .cloned()
    }
}

impl Default for ReminderQueue {
    fn default() -> Self {
        Self::new()
    }
}
