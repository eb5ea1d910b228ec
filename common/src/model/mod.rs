pub mod candidate;
pub mod config;
pub mod district;
pub mod submission;
