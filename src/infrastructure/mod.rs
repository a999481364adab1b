//! Infrastructure layer for environment interactions and async plumbing.
//!
//! - [`paths`]: data directory and terminal size resolution
//! - [`cancellation`]: the [`CancellationToken`] shared by timers and requests

pub mod cancellation;
pub mod paths;

pub use cancellation::CancellationToken;
pub use paths::{get_data_dir, terminal_size};
