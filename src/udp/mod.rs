//! UDP ingest subsystem.
//!
//! # Data Flow
//! ```text
//! UDP datagram
//!     → receiver.rs (recv loop, shutdown-aware)
//!     → storage::RawStore::append (always the I2S file)
//! ```
//!
//! # Design Decisions
//! - Datagrams are never acknowledged; UDP is fire-and-forget
//! - The devices only stream microphone data over UDP, so every
//!   datagram targets the I2S capture file

pub mod receiver;

pub use receiver::{UdpReceiver, UdpReceiverError};
