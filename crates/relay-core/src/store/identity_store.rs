use crate::LinkedIdentity;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::debug;
use tokio::sync::Mutex;

/// Result of a link attempt. Not-found is a soft outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked { line_user_id: String },
    NoUnlinkedIdentity,
}

/// In-memory identity link store with an optional read-only seed backing.
///
/// The seed mapping (email -> platform user id) comes from a flat JSON file
/// maintained outside this service; lookups consult live identities first
/// and fall back to the seed. All live state sits behind one mutex so
/// concurrent handlers cannot interleave read-modify-write cycles.
pub struct IdentityStore {
    identities: Mutex<HashMap<String, LinkedIdentity>>,
    seed: HashMap<String, String>,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self::with_seed(HashMap::new())
    }

    pub fn with_seed(seed: HashMap<String, String>) -> Self {
        Self {
            identities: Mutex::new(HashMap::new()),
            seed,
        }
    }

    /// Upsert an identity from an inbound platform event.
    /// Unknown users get a fresh unlinked identity; known users only have
    /// their last_seen refreshed. No error conditions.
    pub async fn record_inbound_event(&self, line_user_id: &str) {
        self.record_inbound_event_at(line_user_id, Utc::now()).await;
    }

    pub async fn record_inbound_event_at(&self, line_user_id: &str, seen_at: DateTime<Utc>) {
        let mut identities = self.identities.lock().await;

        identities
            .entry(line_user_id.to_string())
            .and_modify(|identity| identity.last_seen = seen_at)
            .or_insert_with(|| {
                debug!("New platform identity: {}", line_user_id);
                let mut identity = LinkedIdentity::new(line_user_id.to_string());
                identity.last_seen = seen_at;
                identity
            });
    }

    /// Link an email to the most-recently-seen unlinked identity.
    ///
    /// The most-recent heuristic can misassign when several unlinked users
    /// are active at once. Whether to require an explicit confirmation step
    /// instead is still an open product decision; keep the heuristic until
    /// that lands.
    pub async fn link_by_email(&self, email: &str) -> LinkOutcome {
        let mut identities = self.identities.lock().await;

        let candidate = identities
            .values_mut()
            .filter(|identity| !identity.is_linked())
            .max_by_key(|identity| identity.last_seen);

        match candidate {
            Some(identity) => {
                identity.email = Some(email.to_string());
                LinkOutcome::Linked {
                    line_user_id: identity.line_user_id.clone(),
                }
            }
            None => LinkOutcome::NoUnlinkedIdentity,
        }
    }

    /// Find the platform user id linked to an email.
    /// Live identities win over the seed mapping.
    pub async fn lookup_by_email(&self, email: &str) -> Option<String> {
        let identities = self.identities.lock().await;

        let live = identities
            .values()
            .find(|identity| identity.email.as_deref() == Some(email))
            .map(|identity| identity.line_user_id.clone());

        live.or_else(|| self.seed.get(email).cloned())
    }

    pub async fn identity_count(&self) -> usize {
        self.identities.lock().await.len()
    }

    pub fn seed_count(&self) -> usize {
        self.seed.len()
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}
