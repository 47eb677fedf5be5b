pub mod actor;
pub mod credit;
pub mod movie;
