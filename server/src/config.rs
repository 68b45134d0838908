use clap::Parser;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    time::Duration,
};

pub const DEFAULT_TICK_RATE: u32 = 60;

/// Authoritative pong server
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Address to bind to
    #[arg(short = 'H', long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Simulation ticks per second for every session
    #[arg(
        short,
        long,
        env = "TICK_RATE",
        default_value_t = DEFAULT_TICK_RATE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub tick_rate: u32,

    /// Directory of static client files served at `/`
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn simulation(&self) -> SimulationConfig {
        SimulationConfig {
            tick_rate: self.tick_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub tick_rate: u32,
}

impl SimulationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["server"]);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn overrides() {
        let config = Config::parse_from(["server", "-H", "127.0.0.1", "-p", "8080", "--tick-rate", "30"]);
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.simulation().tick_rate, 30);
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        assert!(Config::try_parse_from(["server", "--tick-rate", "0"]).is_err());
    }

    #[test]
    fn sixty_hertz_interval() {
        let interval = SimulationConfig::default().tick_interval();
        assert_eq!(interval.as_micros(), 16_666);
    }
}
