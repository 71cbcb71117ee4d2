//! Notification composition and delivery

pub mod composer;
pub mod sink;
pub mod smtp;

pub use composer::{combine_names, compose, Notification, ALL_CLEAR_SUBJECT, DUE_SUBJECT};
pub use sink::{FileSink, NotificationSink, StdoutSink};
pub use smtp::SmtpSink;
