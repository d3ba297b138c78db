use clap::Parser;
use std::net::{IpAddr, SocketAddr};

/// WebRTC signaling relay: peers meet in named rooms and trade offers,
/// answers and ICE candidates over a WebSocket.
#[derive(Parser, Debug, Clone)]
#[command(name = "huddle", version)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "HUDDLE_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Service name reported by the health probe
    #[arg(long, env = "HUDDLE_SERVICE", default_value = "huddle")]
    pub service: String,

    /// Log filter, e.g. `info` or `huddle_server=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log: String,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
