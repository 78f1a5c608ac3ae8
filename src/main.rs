//! `hubaddr` — command-line front end for the conversion library.
//!
//! A thin synchronous shell: parse arguments, call the library, print the
//! result or the error message. All validation lives in the library.

use clap::{Parser, Subcommand};
use eyre::{eyre, Result};

use hubaddr_rs::{
    eth_to_substrate, is_valid_eth_address, is_valid_ss58_address, networks,
    substrate_to_eth, to_checksum_address, Ss58Prefix,
};

#[derive(Parser)]
#[command(name = "hubaddr", version, about = "Convert between EVM and Substrate Hub addresses")]
struct Cli {
    /// Emit results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an EVM address to its SS58 form
    ToSubstrate {
        /// EVM address (0x + 40 hex chars)
        address: String,
        /// Known network name (see `hubaddr networks`)
        #[arg(long, conflicts_with = "prefix")]
        network: Option<String>,
        /// Raw SS58 network prefix
        #[arg(long)]
        prefix: Option<u16>,
    },
    /// Convert an SS58 address to its EIP-55 checksummed EVM form
    ToEth {
        /// SS58 address
        address: String,
    },
    /// Print the EIP-55 checksummed form of an EVM address
    Checksum {
        /// EVM address (40 hex chars, 0x optional)
        address: String,
    },
    /// Check whether an address is valid EVM or SS58
    Validate {
        /// Address in either encoding
        address: String,
    },
    /// List known networks
    Networks,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let cli = Cli::parse();
    run(cli)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::ToSubstrate {
            address,
            network,
            prefix,
        } => {
            let prefix = resolve_prefix(network.as_deref(), prefix)?;
            let ss58 = eth_to_substrate(&address, prefix)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "ss58": ss58, "prefix": prefix.to_u16() })
                );
            } else {
                println!("{}", ss58);
            }
        }
        Commands::ToEth { address } => {
            let eth = substrate_to_eth(&address)?;
            if cli.json {
                println!("{}", serde_json::json!({ "eth": eth }));
            } else {
                println!("{}", eth);
            }
        }
        Commands::Checksum { address } => {
            let checksummed = to_checksum_address(&address)?;
            if cli.json {
                println!("{}", serde_json::json!({ "eth": checksummed }));
            } else {
                println!("{}", checksummed);
            }
        }
        Commands::Validate { address } => {
            let kind = if is_valid_eth_address(&address) {
                Some("evm")
            } else if is_valid_ss58_address(&address) {
                Some("ss58")
            } else {
                None
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "valid": kind.is_some(), "kind": kind })
                );
            } else {
                match kind {
                    Some(k) => println!("valid ({})", k),
                    None => println!("invalid"),
                }
            }
            if kind.is_none() {
                std::process::exit(1);
            }
        }
        Commands::Networks => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(networks::KNOWN_NETWORKS)?);
            } else {
                for n in networks::KNOWN_NETWORKS {
                    println!(
                        "{:<22} prefix {:<5} {} ({})",
                        n.identifier, n.ss58_prefix, n.display_name, n.rpc_url
                    );
                }
            }
        }
    }
    Ok(())
}

/// Resolve `--network`/`--prefix` into an SS58 prefix. Exactly one of the
/// two must be present.
fn resolve_prefix(network: Option<&str>, prefix: Option<u16>) -> Result<Ss58Prefix> {
    match (network, prefix) {
        (Some(name), None) => {
            let net = networks::find(name)
                .ok_or_else(|| eyre!("unknown network '{}'; see `hubaddr networks`", name))?;
            tracing::debug!(network = name, prefix = net.ss58_prefix.to_u16(), "resolved network");
            Ok(net.ss58_prefix)
        }
        (None, Some(p)) => Ok(Ss58Prefix::new(p)?),
        (None, None) => Err(eyre!("one of --network or --prefix is required")),
        (Some(_), Some(_)) => unreachable!("clap rejects the combination"),
    }
}
