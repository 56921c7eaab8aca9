//! Raw capture file subsystem.
//!
//! # Data Flow
//! ```text
//! payload bytes (HTTP body or UDP datagram)
//!     → store.rs (open target in append mode, write, close)
//!     → adc.raw / i2s.raw
//! ```
//!
//! # Design Decisions
//! - One independent open-append-close per payload; no shared handle
//! - No ordering guarantee across concurrent appends
//! - Write errors propagate to the caller, which logs them; no retry

pub mod store;

pub use store::{RawStore, SampleKind};
