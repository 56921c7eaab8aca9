//! Ingest listener for raw sample streams.
//!
//! Capture firmware streams two kinds of binary payloads at this daemon:
//! 16-bit single-channel ADC readings and 32-bit stereo I2S microphone
//! samples. Payloads arrive as HTTP POST bodies or UDP datagrams and are
//! appended, untouched, to one append-only raw file per kind.
//!
//! # Architecture Overview
//!
//! ```text
//!   device ── UDP datagram ───────▶ udp::UdpReceiver ──┐
//!   device ── POST /i2s_samples ──▶ http::HttpServer ──┼──▶ storage::RawStore ──▶ i2s.raw
//!   device ── POST /adc_samples ──▶ http::HttpServer ──────▶ storage::RawStore ──▶ adc.raw
//!
//!   Cross-cutting: config │ lifecycle (shutdown) │ observability (logs, metrics)
//! ```
//!
//! There is deliberately no framing, no payload validation, no ordering
//! guarantee across concurrent appends, and no retry on write failure.

// Core subsystems
pub mod config;
pub mod http;
pub mod storage;
pub mod udp;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::SinkConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use storage::{RawStore, SampleKind};
pub use udp::UdpReceiver;
