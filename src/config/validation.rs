//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check bind and metrics addresses parse as socket addresses
//! - Validate value ranges (sizes and timeouts > 0)
//! - Keep raw file names inside the data directory
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SinkConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::SinkConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Config field the error refers to, e.g. "http.bind_address".
    pub field: &'static str,
    /// Human-readable description of what is wrong.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &SinkConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_addr(&mut errors, "http.bind_address", &config.http.bind_address);
    check_addr(&mut errors, "udp.bind_address", &config.udp.bind_address);

    if config.http.max_body_bytes == 0 {
        errors.push(ValidationError {
            field: "http.max_body_bytes",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.http.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "http.request_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.udp.recv_buffer_bytes == 0 {
        errors.push(ValidationError {
            field: "udp.recv_buffer_bytes",
            message: "must be greater than zero".to_string(),
        });
    }

    check_file_name(&mut errors, "storage.adc_file", &config.storage.adc_file);
    check_file_name(&mut errors, "storage.i2s_file", &config.storage.i2s_file);

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError {
            field: "observability.log_level",
            message: format!(
                "unknown level {:?}, expected one of {}",
                config.observability.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }
    if config.observability.metrics_enabled {
        check_addr(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_addr(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field,
            message: format!("{:?} is not a valid socket address", value),
        });
    }
}

fn check_file_name(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.push(ValidationError {
            field,
            message: "must not be empty".to_string(),
        });
    } else if value.contains('/') || value.contains('\\') {
        errors.push(ValidationError {
            field,
            message: format!("{:?} must be a bare file name", value),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SinkConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_bind_address() {
        let mut config = SinkConfig::default();
        config.http.bind_address = "not-an-address".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "http.bind_address");
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = SinkConfig::default();
        config.http.bind_address = "nope".to_string();
        config.udp.recv_buffer_bytes = 0;
        config.storage.i2s_file = "captures/i2s.raw".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_unknown_log_level() {
        let mut config = SinkConfig::default();
        config.observability.log_level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "observability.log_level");
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = SinkConfig::default();
        config.observability.metrics_address = "nope".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_file_name() {
        let mut config = SinkConfig::default();
        config.storage.adc_file = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "storage.adc_file");
    }
}
