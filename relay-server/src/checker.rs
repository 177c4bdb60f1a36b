//! Reminder checker: scans for due reminders and triggers delivery.
//!
//! Exactly one delivery attempt per due reminder per invocation. A failed
//! push leaves the record unsent so the next invocation picks it up again;
//! there is no retry inside an invocation, no backoff, and no dead-letter.
//! The due list is snapshotted before any push, so two overlapping
//! invocations can both attempt the same reminder before either marks it
//! sent. Callers are expected to trigger checks serially.

use crate::state::AppState;

use chrono::{DateTime, Utc};
use log::{info, warn};

#[derive(Debug, Default, Clone, Copy)]
pub struct CheckOutcome {
    /// Delivery calls made
    pub attempted: usize,
    /// Reminders marked sent
    pub delivered: usize,
}

pub async fn run_check(state: &AppState, now: DateTime<Utc>) -> CheckOutcome {
    let due = state.reminders.due_unsent(now).await;
    let mut outcome = CheckOutcome::default();

    if due.is_empty() {
        return outcome;
    }

    info!("Checking {} due reminder(s)", due.len());

    for reminder in due {
        let recipient = match reminder.line_user_id.clone() {
            Some(id) => Some(id),
            None => state.identities.lookup_by_email(&reminder.email).await,
        };

        let Some(recipient) = recipient else {
            warn!(
                "Reminder {} has no resolvable recipient for {}, leaving unsent",
                reminder.id, reminder.email
            );
            continue;
        };

        outcome.attempted += 1;

        match state.messaging.push_text(&recipient, &reminder.text).await {
            Ok(()) => {
                state.reminders.mark_sent(reminder.id).await;
                outcome.delivered += 1;
                info!("Reminder {} delivered to {}", reminder.id, recipient);
            }
            Err(e) => {
                warn!(
                    "Reminder {} delivery failed, next check will try again: {}",
                    reminder.id, e
                );
            }
        }
    }

    outcome
}
