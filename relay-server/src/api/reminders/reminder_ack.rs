use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReminderAck {
    pub ok: bool,
}
