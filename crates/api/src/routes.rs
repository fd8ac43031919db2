/// Disponibility endpoints
pub mod disponibility;
/// Liveness and version endpoints
pub mod health;
/// Reservation endpoints
pub mod reservation;
/// User endpoints
pub mod user;
