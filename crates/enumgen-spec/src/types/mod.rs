pub mod common;
pub mod config;
pub mod entry;
pub mod error;
