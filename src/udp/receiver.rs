//! UDP datagram receiver.

use std::net::SocketAddr;

use tokio::net::UdpSocket;
use tokio::sync::broadcast;

use crate::config::UdpConfig;
use crate::observability::metrics;
use crate::storage::{RawStore, SampleKind};

/// Error type for receiver setup.
#[derive(Debug)]
pub enum UdpReceiverError {
    /// Bind address failed to parse.
    Addr(std::net::AddrParseError),
    /// Failed to bind the socket.
    Bind(std::io::Error),
}

impl std::fmt::Display for UdpReceiverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UdpReceiverError::Addr(e) => write!(f, "Invalid bind address: {}", e),
            UdpReceiverError::Bind(e) => write!(f, "Failed to bind: {}", e),
        }
    }
}

impl std::error::Error for UdpReceiverError {}

/// UDP socket wrapper that feeds datagrams into the raw store.
#[derive(Debug)]
pub struct UdpReceiver {
    socket: UdpSocket,
    recv_buffer_bytes: usize,
}

impl UdpReceiver {
    /// Bind to the configured address.
    pub async fn bind(config: &UdpConfig) -> Result<Self, UdpReceiverError> {
        let addr: SocketAddr = config
            .bind_address
            .parse()
            .map_err(UdpReceiverError::Addr)?;

        let socket = UdpSocket::bind(addr).await.map_err(UdpReceiverError::Bind)?;
        let local_addr = socket.local_addr().map_err(UdpReceiverError::Bind)?;

        tracing::info!(
            address = %local_addr,
            recv_buffer_bytes = config.recv_buffer_bytes,
            "UDP receiver bound"
        );

        Ok(Self {
            socket,
            recv_buffer_bytes: config.recv_buffer_bytes,
        })
    }

    /// Get the local address this receiver is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.socket.local_addr()
    }

    /// Receive datagrams until the shutdown signal fires.
    ///
    /// Every datagram is appended to the I2S capture file. Append and
    /// receive errors are logged and the loop keeps going; a datagram is
    /// never retried.
    pub async fn run(self, store: RawStore, mut shutdown: broadcast::Receiver<()>) {
        let mut buf = vec![0u8; self.recv_buffer_bytes];

        loop {
            tokio::select! {
                result = self.socket.recv_from(&mut buf) => match result {
                    Ok((len, peer)) => {
                        tracing::info!(bytes = len, peer = %peer, "received samples over UDP");
                        match store.append(SampleKind::I2s, &buf[..len]).await {
                            Ok(written) => {
                                metrics::record_ingest(SampleKind::I2s.as_str(), "udp", written as u64);
                            }
                            Err(e) => {
                                tracing::error!(
                                    file = %store.path(SampleKind::I2s).display(),
                                    error = %e,
                                    "failed to append samples"
                                );
                                metrics::record_write_error(SampleKind::I2s.as_str());
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "UDP receive failed");
                    }
                },
                _ = shutdown.recv() => {
                    tracing::info!("UDP receiver stopping");
                    break;
                }
            }
        }
    }
}
