pub mod attachment;
pub mod candidates;
pub mod policy;
pub mod register;
pub mod sheet;
