use crate::upstream::generative::GenerativeClient;
use crate::upstream::messaging::MessagingClient;

use relay_core::{AssetCachePolicy, IdentityStore, ReminderQueue};

use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state for all handlers.
///
/// The stores are owned here and injected through axum state - no
/// process-wide globals, so tests get isolated instances.
#[derive(Clone)]
pub struct AppState {
    pub identities: Arc<IdentityStore>,
    pub reminders: Arc<ReminderQueue>,
    pub generative: GenerativeClient,
    pub messaging: MessagingClient,
    pub cache_policy: Arc<AssetCachePolicy>,
    pub static_dir: Option<PathBuf>,
}
