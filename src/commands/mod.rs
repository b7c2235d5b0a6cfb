//! CLI commands for wordladder

pub mod config;
pub mod dispatch;
pub mod neighbors;
pub mod search;
pub mod stats;
