use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled text-delivery request with a due timestamp.
///
/// Lifecycle: created -> due (time passes) -> delivery attempted ->
/// sent, or still unsent and picked up again by the next check. There is
/// no terminal failure state; a reminder whose delivery always fails stays
/// unsent forever. Held in memory only, so lost on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub email: String,
    /// Direct push recipient; when absent the checker resolves one
    /// through the identity store at delivery time
    pub line_user_id: Option<String>,
    pub text: String,
    pub due_at: DateTime<Utc>,
    pub sent: bool,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    pub fn new(
        email: String,
        line_user_id: Option<String>,
        text: String,
        due_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            line_user_id,
            text,
            due_at,
            sent: false,
            created_at: Utc::now(),
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        !self.sent && self.due_at <= now
    }
}
