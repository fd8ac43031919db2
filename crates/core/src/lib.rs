//! # Planning Core
//!
//! Domain types shared by the planning server and its clients: entities,
//! response envelopes, the error taxonomy, response codes and the ordered
//! validation chains applied to request bodies.

pub mod codes;
pub mod errors;
pub mod models;
pub mod validation;
