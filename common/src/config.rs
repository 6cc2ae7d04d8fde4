use std::time::Duration;

pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(10);
pub const DEFAULT_PROBE_ATTEMPTS: u32 = 5;
pub const DEFAULT_SCAN_PORT: u16 = 1433;
pub const DEFAULT_PING_PORT: u16 = 3342;

/// Tunables for a single diagnostic run.
///
/// Every component receives the values it needs from here through its
/// constructor; nothing reads them from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Collection window of the range scanner. Attempts still unresolved when
    /// it elapses are not counted.
    ///
    /// Also bounds the single-host liveness ping.
    pub time_budget: Duration,
    /// Sequential connects made against every reachable host by the latency prober.
    pub probe_attempts: u32,
    /// Port swept by the range scanner and measured by the latency prober.
    pub port: u16,
    /// Port used by the single-host liveness ping.
    pub ping_port: u16,
    /// Optional upper bound for a single latency probe.
    ///
    /// `None` leaves failure detection to the operating system.
    pub probe_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            probe_attempts: DEFAULT_PROBE_ATTEMPTS,
            port: DEFAULT_SCAN_PORT,
            ping_port: DEFAULT_PING_PORT,
            probe_timeout: None,
        }
    }
}
