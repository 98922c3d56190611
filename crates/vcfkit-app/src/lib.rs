pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod render;
