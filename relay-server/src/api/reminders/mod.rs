pub mod check_reminders_response;
pub mod create_reminder_request;
pub mod reminder_ack;
pub mod reminders;
