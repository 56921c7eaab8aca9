use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::net::UdpSocket;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sink-cli")]
#[command(about = "Replay capture files at a running sample-sink", long_about = None)]
struct Cli {
    /// Base URL of the sink's HTTP listener
    #[arg(short, long, default_value = "http://localhost:5003")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a capture file at the sink
    Send {
        /// Payload kind; selects the target raw file
        #[arg(long, value_enum)]
        kind: Kind,

        /// Transport to send over
        #[arg(long, value_enum, default_value = "http")]
        transport: Transport,

        /// UDP address of the sink (with --transport udp)
        #[arg(long, default_value = "127.0.0.1:5003")]
        udp_addr: String,

        /// Datagram payload size for UDP sends
        #[arg(long, default_value_t = 1024)]
        chunk_bytes: usize,

        /// File whose bytes are sent verbatim
        file: PathBuf,
    },
    /// Check sink liveness
    Health,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Adc,
    I2s,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Transport {
    Http,
    Udp,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Send {
            kind,
            transport,
            udp_addr,
            chunk_bytes,
            file,
        } => {
            let payload = std::fs::read(&file)?;
            match transport {
                Transport::Http => send_http(&cli.url, kind, payload).await?,
                Transport::Udp => {
                    if kind == Kind::Adc {
                        eprintln!("Error: the sink only accepts I2S samples over UDP");
                        std::process::exit(2);
                    }
                    send_udp(&udp_addr, chunk_bytes, &payload)?;
                }
            }
        }
        Commands::Health => {
            let res = reqwest::get(format!("{}/healthz", cli.url)).await?;
            let status = res.status();
            let json: Value = res.json().await?;
            println!("{} {}", status, serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

async fn send_http(url: &str, kind: Kind, payload: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
    let path = match kind {
        Kind::Adc => "/adc_samples",
        Kind::I2s => "/i2s_samples",
    };
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}{}", url, path))
        .body(payload)
        .send()
        .await?;
    println!("{} {}", res.status(), res.text().await?);
    Ok(())
}

fn send_udp(addr: &str, chunk_bytes: usize, payload: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    let mut sent = 0usize;
    let mut datagrams = 0usize;
    for chunk in payload.chunks(chunk_bytes.max(1)) {
        sent += socket.send_to(chunk, addr)?;
        datagrams += 1;
    }
    println!("sent {} bytes in {} datagrams", sent, datagrams);
    Ok(())
}
