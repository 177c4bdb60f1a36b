use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckRemindersResponse {
    pub ok: bool,
    /// Delivery calls made this invocation
    pub attempted: usize,
    /// Reminders marked sent this invocation
    pub delivered: usize,
}
