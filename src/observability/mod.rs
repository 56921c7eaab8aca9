//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Both listeners produce:
//!     → logging.rs (structured log events, one line per payload)
//!     → metrics.rs (ingest counters, Prometheus scrape endpoint)
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured log level when set
//! - Metrics are optional and off by default; recording is a no-op
//!   until the exporter is installed

pub mod logging;
pub mod metrics;
