//! CLI commands for reposim

pub mod compare;
pub mod config;
pub mod dispatch;
pub mod files;
pub mod scan;
