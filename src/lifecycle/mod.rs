//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! SIGINT/SIGTERM (signals.rs)
//!     → Shutdown::trigger (shutdown.rs)
//!     → broadcast to HTTP server and UDP receiver
//!     → tasks drain and exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
