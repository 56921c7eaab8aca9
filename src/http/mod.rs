//! HTTP ingest subsystem.
//!
//! # Data Flow
//! ```text
//! POST /adc_samples | /i2s_samples
//!     → server.rs (Axum setup, body limit, timeout, request ID, trace)
//!     → storage::RawStore::append
//!     → 200 "OK" / 500 "Error"
//! ```

pub mod server;

pub use server::HttpServer;
