pub mod messages;
pub mod notifications;
