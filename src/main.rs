use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use sample_sink::config::{self, ConfigError, SinkConfig};
use sample_sink::http::HttpServer;
use sample_sink::lifecycle::{signals, Shutdown};
use sample_sink::observability::{logging, metrics};
use sample_sink::storage::RawStore;
use sample_sink::udp::UdpReceiver;

#[derive(Parser, Debug)]
#[command(name = "sample-sink", about = "UDP/HTTP ingest listener for raw ADC and I2S sample streams")]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the HTTP bind address, e.g. 0.0.0.0:5003
    #[arg(long)]
    http_bind: Option<String>,

    /// Override the UDP bind address, e.g. 0.0.0.0:5003
    #[arg(long)]
    udp_bind: Option<String>,

    /// Override the directory the raw capture files are written to
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match args.config.as_deref() {
        Some(path) => config::load_config(path)?,
        None => SinkConfig::default(),
    };
    if let Some(bind) = args.http_bind {
        config.http.bind_address = bind;
    }
    if let Some(bind) = args.udp_bind {
        config.udp.bind_address = bind;
    }
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = dir;
    }
    config::validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_tracing(&config.observability);

    tracing::info!(
        http_bind = %config.http.bind_address,
        udp_bind = %config.udp.bind_address,
        data_dir = %config.storage.data_dir.display(),
        "Configuration loaded"
    );

    let store = RawStore::open(&config.storage)?;

    if config.observability.metrics_enabled {
        // validate_config guarantees the address parses
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let shutdown = Shutdown::new();

    let receiver = UdpReceiver::bind(&config.udp).await?;
    let udp_task = tokio::spawn(receiver.run(store.clone(), shutdown.subscribe()));

    let listener = TcpListener::bind(&config.http.bind_address).await?;
    let server = HttpServer::new(&config.http, store);
    let server_shutdown = shutdown.subscribe();
    let server_task = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    signals::wait_for_signal().await;
    tracing::info!("Shutdown signal received");
    shutdown.trigger();

    server_task.await??;
    let _ = udp_task.await;

    tracing::info!("Shutdown complete");
    Ok(())
}
