//! Command-line configuration and logging setup.

use std::io;

use anyhow::Result;
use clap::Parser;
use corelib::PartitionerKind;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;

/// Class name of the partitioner used when none is configured.
pub const DEFAULT_PARTITIONER: &str = "org.apache.cassandra.dht.Murmur3Partitioner";

#[derive(Debug, Clone, Parser)]
#[command(name = "tokenring", version, about = "Inspect token ring partitioning and token ranges.")]
pub struct CliConfig {
    /// Partitioner class name, matched by suffix.
    #[arg(long, global = true, env = "TOKENRING_PARTITIONER", default_value = DEFAULT_PARTITIONER)]
    pub partitioner: PartitionerKind,

    /// Print a JSON document instead of one line per item.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);
        let result = self.command.execute(self.partitioner)?;
        result.write_to(&mut io::stdout().lock(), self.json)
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, falling back to
/// `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
