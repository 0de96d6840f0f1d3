use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

use cli::{ButtonActionHashesCommand, Cli, Command, EventNamesCommand, ScannerConfigsCommand};
use commands::Session;
use config::Config;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("scancfg=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    // Load config
    let config = if args.config.exists() {
        match Config::load(&args.config) {
            Ok(c) => {
                info!("Loaded config from {:?}", args.config);
                c
            }
            Err(e) => {
                warn!("{:#}, using defaults", e);
                Config::default()
            }
        }
    } else {
        debug!("No config file at {:?}, using defaults", args.config);
        Config::default()
    };

    let session = Session::new(config, args.registry)?;

    match args.command {
        Command::Info { elf } => commands::info::run(&session, elf.elf),
        Command::EventNames(EventNamesCommand::Dump { elf, output }) => {
            commands::event_names::dump(&session, elf.elf, &output)
        }
        Command::ScannerConfigs(ScannerConfigsCommand::Dump {
            elf,
            event_names,
            output,
        }) => commands::scanner_configs::dump(&session, elf.elf, event_names.event_names, &output),
        Command::ScannerConfigs(ScannerConfigsCommand::Patch {
            elf,
            event_names,
            input,
            output,
        }) => commands::scanner_configs::patch(
            &session,
            elf.elf,
            event_names.event_names,
            &input,
            &output,
        ),
        Command::ButtonActionHashes(ButtonActionHashesCommand::Dump { elf, num, output }) => {
            commands::button_action_hashes::dump(&session, elf.elf, num, &output)
        }
        Command::ButtonActionHashes(ButtonActionHashesCommand::Patch { elf, input, output }) => {
            commands::button_action_hashes::patch(&session, elf.elf, &input, &output)
        }
    }
}
