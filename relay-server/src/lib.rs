pub mod api;
pub mod assets;
pub mod checker;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;
pub mod upstream;

#[cfg(test)]
mod tests;

pub use api::{
    chat::relay_chat,
    error::ApiError,
    error::Result as ApiResult,
    identity::{
        identity::{link_line_email, lookup_line_user, receive_webhook},
        line_user_query::LineUserQuery,
        line_user_response::LineUserResponse,
        link_email_request::LinkEmailRequest,
        link_email_response::LinkEmailResponse,
        webhook_event::{EventSource, WebhookEvent, WebhookPayload},
    },
    reminders::{
        check_reminders_response::CheckRemindersResponse,
        create_reminder_request::CreateReminderRequest,
        reminder_ack::ReminderAck,
        reminders::{check_reminders, submit_reminder},
    },
};

pub use checker::{CheckOutcome, run_check};
pub use state::AppState;
pub use upstream::{
    error::UpstreamError, generative::GenerativeClient, messaging::MessagingClient,
};

pub use crate::routes::build_router;
