pub mod smtp;
pub mod welcome_notifier;
