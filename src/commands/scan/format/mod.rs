//! Output formatting for the scan command

pub mod human;
pub mod json;
pub mod records;
