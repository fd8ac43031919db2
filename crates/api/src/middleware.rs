/// Mapping of domain errors and middleware failures to error envelopes
pub mod error_handling;
