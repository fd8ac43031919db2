//! mockall doubles of the repository traits, for handler tests that run
//! without a database.

pub mod repositories;
