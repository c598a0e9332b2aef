use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "raise3d",
    version,
    about = "A utility to interact with Raise3D printers."
)]
pub struct Cli {
    /// Configuration file, read on top of ./raise3d.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// More logging, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Return information about the printer.
    Info(PrinterArgs),
    /// Return printer job status.
    Job(PrinterArgs),
    /// Return printer status.
    Status(PrinterArgs),
    /// Monitor the selected printer. Control-C to exit.
    Monitor(MonitorArgs),
}

impl Command {
    pub fn printer(&self) -> &PrinterArgs {
        match self {
            Self::Info(args) | Self::Job(args) | Self::Status(args) => args,
            Self::Monitor(args) => &args.printer,
        }
    }
}

#[derive(Debug, Args)]
pub struct PrinterArgs {
    /// The printer's local address (host[:port])
    #[arg(short, long)]
    pub addr: String,

    /// The printer's password, prompted for when missing
    #[arg(short, long)]
    pub password: Option<String>,
}

#[derive(Debug, Args)]
pub struct MonitorArgs {
    #[command(flatten)]
    pub printer: PrinterArgs,

    /// Alertzy account key to send notifications to
    #[arg(long)]
    pub notify: Option<String>,

    /// Seconds between polls [default: 10]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,
}
