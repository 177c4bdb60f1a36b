use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Association between a messaging-platform user and an email address.
///
/// Created on the first inbound webhook event from an unknown platform user.
/// Never deleted. At most one email at a time; nothing stops two identities
/// from ending up linked to the same email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedIdentity {
    pub line_user_id: String,
    pub email: Option<String>,
    pub last_seen: DateTime<Utc>,
}

impl LinkedIdentity {
    pub fn new(line_user_id: String) -> Self {
        Self {
            line_user_id,
            email: None,
            last_seen: Utc::now(),
        }
    }

    pub fn is_linked(&self) -> bool {
        self.email.is_some()
    }
}
