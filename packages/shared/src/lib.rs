//! Shared utilities for room-probe binaries.

pub mod logger;

pub use logger::setup_logger;
