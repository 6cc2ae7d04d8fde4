pub mod info;
pub mod latency;
pub mod ping;
pub mod resolve;
pub mod sweep;

use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use sweepr_common::config::{
    Config, DEFAULT_PING_PORT, DEFAULT_PROBE_ATTEMPTS, DEFAULT_SCAN_PORT, DEFAULT_TIME_BUDGET,
};
use sweepr_common::error;

/// Wrong number of arguments or an unparsable option.
pub const EXIT_USAGE: i32 = -1;
/// The subnet argument does not look like `a.b.c.d/nn`.
pub const EXIT_BAD_RANGE: i32 = -2;

#[derive(Parser, Debug)]
#[command(name = "sweepr", version)]
#[command(about = "Finds the hosts of a subnet that accept TCP connections and measures how fast they answer.")]
pub struct CommandLine {
    /// Subnet to sweep, e.g. 10.0.0.0/24 (walked from the address given)
    pub subnet: String,
    /// Host name to resolve and ping
    pub hostname: String,
    /// Connection attempts per reachable host when measuring latency
    #[arg(short = 'n', long = "num-pings", default_value_t = DEFAULT_PROBE_ATTEMPTS)]
    pub num_pings: u32,
    /// Seconds to wait for handshakes before the sweep is sampled
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIME_BUDGET.as_secs())]
    pub time_budget: u64,
    /// Port swept across the subnet and used for latency probes
    #[arg(short, long, default_value_t = DEFAULT_SCAN_PORT)]
    pub port: u16,
    /// Port used to ping the host name
    #[arg(long, default_value_t = DEFAULT_PING_PORT)]
    pub ping_port: u16,
    /// Give up on a single latency probe after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub probe_timeout: Option<u64>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(commands) => commands,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => {
                let _ = e.print();
                std::process::exit(EXIT_USAGE)
            }
        }
    }

    pub fn to_config(&self) -> Config {
        Config {
            time_budget: Duration::from_secs(self.time_budget),
            probe_attempts: self.num_pings,
            port: self.port,
            ping_port: self.ping_port,
            probe_timeout: self.probe_timeout.map(Duration::from_millis),
        }
    }
}

pub fn exit_invalid_range(input: &str) -> ! {
    error!("Invalid IP address range format: '{input}'");
    eprintln!("{}", CommandLine::command().render_usage());
    std::process::exit(EXIT_BAD_RANGE)
}
