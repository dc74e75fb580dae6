pub mod log_match;
pub mod statistics;
