//! Domain services

pub mod expiration;

pub use expiration::{classify, EventStatus, Expiration, Urgency};
