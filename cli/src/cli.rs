use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use wave_portal::config::DEFAULT_CONFIG_PATH;

#[derive(Debug, Parser)]
#[command(name = "wave-portal")]
#[command(bin_name = "wave-portal")]
#[command(about = "Wave at the WavePortal contract from your terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the portal for the already-authorized account, if any.
    Status(ViewArgs),
    /// Ask the wallet to authorize an account.
    Connect(PortalOptions),
    /// Send a wave and wait for it to be mined.
    Wave(WaveArgs),
    /// List every past wave.
    Logs(ViewArgs),
    /// Keep one session open and read actions from stdin.
    Interactive(PortalOptions),
    /// Write a default configuration file.
    InitConfig(InitConfigArgs),
    /// Generate shell completion scripts.
    Completions(CompletionsArgs),
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            Self::Status(args) | Self::Logs(args) => args.portal.verbose,
            Self::Connect(portal) | Self::Interactive(portal) => portal.verbose,
            Self::Wave(args) => args.view.portal.verbose,
            Self::InitConfig(_) | Self::Completions(_) => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct PortalOptions {
    /// Path to the configuration file. Missing files fall back to defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON-RPC endpoint exposing the wallet and the chain.
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Address of the WavePortal contract.
    #[arg(long)]
    pub contract: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub portal: PortalOptions,

    /// Print the page as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct WaveArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Message to attach to the wave.
    pub message: Option<String>,
}

#[derive(Debug, Args)]
pub struct InitConfigArgs {
    /// Where to write the configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub path: PathBuf,

    /// JSON-RPC endpoint to record instead of the default.
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Contract address to record instead of the default.
    #[arg(long)]
    pub contract: Option<String>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}
