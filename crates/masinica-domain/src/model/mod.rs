//! Domain model types

pub mod date;
pub mod event;

pub use date::parse_user_date;
pub use event::Event;
