//! Append-only raw capture files.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::config::StorageConfig;

/// The two payload kinds the sink accepts.
///
/// The kind selects the target raw file; payload contents are never
/// inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// 16-bit single-channel ADC readings.
    Adc,
    /// 32-bit stereo I2S microphone samples.
    I2s,
}

impl SampleKind {
    /// Short label used in logs and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleKind::Adc => "adc",
            SampleKind::I2s => "i2s",
        }
    }
}

impl std::fmt::Display for SampleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to the per-kind raw capture files.
///
/// Cheap to clone; holds only the resolved paths. Files accumulate payload
/// bytes in arrival order with no internal structure beyond concatenation.
#[derive(Debug, Clone)]
pub struct RawStore {
    adc_path: PathBuf,
    i2s_path: PathBuf,
}

impl RawStore {
    /// Resolve the capture paths, creating the data directory if missing.
    pub fn open(config: &StorageConfig) -> io::Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        Ok(Self {
            adc_path: config.data_dir.join(&config.adc_file),
            i2s_path: config.data_dir.join(&config.i2s_file),
        })
    }

    /// Target path for a payload kind.
    pub fn path(&self, kind: SampleKind) -> &Path {
        match kind {
            SampleKind::Adc => &self.adc_path,
            SampleKind::I2s => &self.i2s_path,
        }
    }

    /// Append the whole payload to the raw file for `kind`.
    ///
    /// Each call opens the file independently in append mode and writes the
    /// payload in one go, so concurrent appends land in whatever order the
    /// runtime schedules them. Returns the number of bytes written.
    pub async fn append(&self, kind: SampleKind, payload: &[u8]) -> io::Result<usize> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.path(kind))
            .await?;
        file.write_all(payload).await?;
        Ok(payload.len())
    }
}
