//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scancfg")]
#[command(version, about = "Need for Speed scanner config tool")]
pub struct Cli {
    /// Config file with default paths
    #[arg(short, long, global = true, default_value = "scancfg.toml")]
    pub config: PathBuf,

    /// Extra registry file with additional builds
    #[arg(long, global = true, env = "SCANCFG_REGISTRY")]
    pub registry: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args)]
pub struct ElfArgs {
    /// Path to the game ELF
    #[arg(long, env = "SCANCFG_ELF")]
    pub elf: Option<PathBuf>,
}

#[derive(Args)]
pub struct EventNamesArgs {
    /// Path to the JSON file with event names
    #[arg(long)]
    pub event_names: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Identify a game ELF, or list known builds when no ELF is given
    Info {
        #[command(flatten)]
        elf: ElfArgs,
    },
    /// Event name table
    #[command(subcommand)]
    EventNames(EventNamesCommand),
    /// Scanner config table
    #[command(subcommand)]
    ScannerConfigs(ScannerConfigsCommand),
    /// Button action hash table (Underground builds)
    #[command(subcommand)]
    ButtonActionHashes(ButtonActionHashesCommand),
}

#[derive(Subcommand)]
pub enum EventNamesCommand {
    /// Dump the event names to a JSON file
    Dump {
        #[command(flatten)]
        elf: ElfArgs,
        /// Output file
        output: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ScannerConfigsCommand {
    /// Dump the scanner configs to a JSON file
    Dump {
        #[command(flatten)]
        elf: ElfArgs,
        #[command(flatten)]
        event_names: EventNamesArgs,
        /// Output file
        output: PathBuf,
    },
    /// Generate a patch file with new scanner configs
    Patch {
        #[command(flatten)]
        elf: ElfArgs,
        #[command(flatten)]
        event_names: EventNamesArgs,
        /// Edited scanner configs JSON file
        input: PathBuf,
        /// Output pnach file
        output: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ButtonActionHashesCommand {
    /// Dump the button action hashes to a JSON file
    Dump {
        #[command(flatten)]
        elf: ElfArgs,
        /// Number of hashes to dump
        #[arg(short, long)]
        num: usize,
        /// Output file
        output: PathBuf,
    },
    /// Generate a patch file with new button action hashes
    Patch {
        #[command(flatten)]
        elf: ElfArgs,
        /// Edited hashes JSON file
        input: PathBuf,
        /// Output pnach file
        output: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scanner_configs_patch() {
        let cli = Cli::try_parse_from([
            "scancfg",
            "scanner-configs",
            "patch",
            "--elf",
            "SLUS_207.52",
            "--event-names",
            "events.json",
            "configs.json",
            "out.pnach",
        ])
        .unwrap();

        match cli.command {
            Command::ScannerConfigs(ScannerConfigsCommand::Patch {
                elf,
                event_names,
                input,
                output,
            }) => {
                assert_eq!(elf.elf, Some(PathBuf::from("SLUS_207.52")));
                assert_eq!(event_names.event_names, Some(PathBuf::from("events.json")));
                assert_eq!(input, PathBuf::from("configs.json"));
                assert_eq!(output, PathBuf::from("out.pnach"));
            }
            _ => panic!("wrong command"),
        }
        assert_eq!(cli.config, PathBuf::from("scancfg.toml"));
    }

    #[test]
    fn test_parse_button_action_hashes_dump_requires_num() {
        assert!(
            Cli::try_parse_from(["scancfg", "button-action-hashes", "dump", "out.json"]).is_err()
        );
        let cli = Cli::try_parse_from([
            "scancfg",
            "button-action-hashes",
            "dump",
            "-n",
            "12",
            "out.json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::ButtonActionHashes(ButtonActionHashesCommand::Dump { num: 12, .. })
        ));
    }
}
