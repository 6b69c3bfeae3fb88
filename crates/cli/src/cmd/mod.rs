//! CLI command implementations

pub mod about;
pub mod activate;
pub mod active;
pub mod config;
pub mod create;
pub mod deactivate;
pub mod ls;
pub mod prefixes;
pub mod status;
