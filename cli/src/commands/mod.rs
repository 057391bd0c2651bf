//! Command implementations

pub mod catalog;
pub mod config;
pub mod install;
pub mod servers;
pub mod version;
