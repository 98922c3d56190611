//! Shared configuration, errors and wire constants for vcfkit.

pub mod config;
pub mod constants;
pub mod error;
pub mod util;
