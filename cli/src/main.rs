mod commands;
mod terminal;

use commands::{CommandLine, info, latency, ping, resolve, sweep};
use sweepr_common::error::RangeError;
use sweepr_common::network::range::AddressRange;
use sweepr_common::info as status;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let range: AddressRange = match commands.subnet.parse() {
        Ok(range) => range,
        Err(RangeError::Pattern(input)) => commands::exit_invalid_range(&input),
        Err(e) => return Err(e.into()),
    };
    let cfg = commands.to_config();

    print::banner();

    print::header("local network configuration");
    info::info()?;

    print::header("resolving host");
    let resolved = resolve::resolve(&commands.hostname).await;

    print::header("subnet sweep");
    let reachable = sweep::sweep(&range, resolved.as_deref().unwrap_or_default(), &cfg).await;

    if let Some(reachable) = reachable {
        print::header("response times");
        if reachable.is_empty() {
            status!("No reachable hosts to measure");
        } else {
            latency::latency(&reachable, &cfg).await;
        }
    }

    if resolved.is_some_and(|addrs| !addrs.is_empty()) {
        print::header("host ping");
        ping::ping(&commands.hostname, &cfg).await;
    }

    print::end_of_program();
    Ok(())
}
