//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;
use tokio::net::TcpListener;

use sample_sink::config::SinkConfig;
use sample_sink::http::HttpServer;
use sample_sink::lifecycle::Shutdown;
use sample_sink::storage::RawStore;
use sample_sink::udp::UdpReceiver;

/// A full sink running on ephemeral ports with a throwaway data directory.
pub struct TestSink {
    pub http_addr: SocketAddr,
    pub udp_addr: SocketAddr,
    pub shutdown: Shutdown,
    data_dir: TempDir,
}

impl TestSink {
    pub fn adc_path(&self) -> PathBuf {
        self.data_dir.path().join("adc.raw")
    }

    pub fn i2s_path(&self) -> PathBuf {
        self.data_dir.path().join("i2s.raw")
    }
}

/// Boot a sink with default settings.
pub async fn start_sink() -> TestSink {
    start_sink_with(SinkConfig::default()).await
}

/// Boot a sink, overriding ports and data dir on the given config.
pub async fn start_sink_with(mut config: SinkConfig) -> TestSink {
    let data_dir = tempfile::tempdir().unwrap();
    config.http.bind_address = "127.0.0.1:0".to_string();
    config.udp.bind_address = "127.0.0.1:0".to_string();
    config.storage.data_dir = data_dir.path().to_path_buf();

    let store = RawStore::open(&config.storage).unwrap();
    let shutdown = Shutdown::new();

    let receiver = UdpReceiver::bind(&config.udp).await.unwrap();
    let udp_addr = receiver.local_addr().unwrap();
    tokio::spawn(receiver.run(store.clone(), shutdown.subscribe()));

    let listener = TcpListener::bind(&config.http.bind_address).await.unwrap();
    let http_addr = listener.local_addr().unwrap();
    let server = HttpServer::new(&config.http, store);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestSink {
        http_addr,
        udp_addr,
        shutdown,
        data_dir,
    }
}

/// Poll a file until it reaches at least `len` bytes or ~2s pass.
///
/// UDP ingest has no acknowledgment, so tests wait on the file itself.
pub async fn wait_for_file_len(path: &Path, len: u64) -> bool {
    for _ in 0..100 {
        if let Ok(meta) = tokio::fs::metadata(path).await {
            if meta.len() >= len {
                return true;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}
