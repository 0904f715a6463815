use tally_server::{ServerConfig, TallyServer};

use crate::cli::{Cli, Command, InfoArgs, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Info(args) => cmd_info(args),
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => Ok(ServerConfig::from_toml_file(path)?),
        None => Ok(ServerConfig::default()),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(TallyServer::new(config).serve())?;
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    println!("tally {}", env!("CARGO_PKG_VERSION"));
    println!("  bind:             {}", config.bind_addr);
    println!("  identity header:  {}", config.identity_header);
    println!("  channel capacity: {}", config.channel_capacity);
    Ok(())
}
