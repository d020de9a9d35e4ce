//! CLI command implementations
//!
//! Every command returns its process exit code:
//! 0 success, 2 configuration error, 3 export already running,
//! 4 store or email service failure, 5 build or delivery failure.

pub mod export;
pub mod init;
pub mod notify;
pub mod validate;
