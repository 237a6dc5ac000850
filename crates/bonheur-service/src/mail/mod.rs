//! Outbound mail delivery

mod smtp;

pub use smtp::SmtpNotifier;
