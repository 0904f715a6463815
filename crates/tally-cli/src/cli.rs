use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Tally — append-only interaction ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the Tally HTTP server
    Serve(ServeArgs),
    /// Print server build and configuration information
    Info(InfoArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind; overrides the config file
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
