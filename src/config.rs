//! Process configuration, from command-line flags or the environment.

use clap::Parser;

use crate::vehicle::ValidationPolicy;

pub const DEFAULT_PORT: u16 = 3000;

/// Fleet management web API
#[derive(Debug, Clone, Parser)]
#[command(name = "fleetman")]
#[command(version)]
#[command(about = "Fleet management web API", long_about = None)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Reject vehicle ids that are not `V` followed by digits
    #[arg(
        long,
        env = "FLEETMAN_STRICT_IDS",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub strict_ids: bool,

    /// Log filter directive (e.g. `info`, `fleetman=debug`)
    #[arg(long, env = "FLEETMAN_LOG", default_value = "info")]
    pub log: String,
}

impl Config {
    /// `host:port`, ready for binding.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            enforce_id_format: self.strict_ids,
        }
    }
}
