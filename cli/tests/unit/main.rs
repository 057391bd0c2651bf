//! Unit tests for fleetpkg CLI
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod architecture;
mod install_service;
