pub mod collection;
pub mod config;
pub mod fault;
pub mod report;
