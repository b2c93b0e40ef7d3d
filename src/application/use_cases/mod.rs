pub mod admin;
pub mod mail_relay;
pub mod waitlist;
