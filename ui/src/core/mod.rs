pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod profile;
pub mod session;
pub mod stats;
