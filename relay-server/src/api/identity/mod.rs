pub mod identity;
pub mod line_user_query;
pub mod line_user_response;
pub mod link_email_request;
pub mod link_email_response;
pub mod webhook_event;
