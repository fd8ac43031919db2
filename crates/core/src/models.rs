pub mod disponibility;
pub mod envelope;
pub mod reservation;
pub mod user;
