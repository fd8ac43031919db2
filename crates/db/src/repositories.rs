//! One repository per entity. Each trait is the whole data-access surface of
//! its entity: find-all, find-by-key, insert, update and delete-by-key.
//! Updates and deletes report the number of affected rows.

pub mod disponibility;
pub mod reservation;
pub mod user;

pub use disponibility::{DisponibilityRepository, PgDisponibilityRepository};
pub use reservation::{PgReservationRepository, ReservationRepository};
pub use user::{PgUserRepository, UserRepository};
