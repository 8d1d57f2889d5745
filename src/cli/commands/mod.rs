//! CLI command implementations

pub mod init;
pub mod process;
pub mod validate;
