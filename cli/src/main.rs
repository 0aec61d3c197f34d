mod cli;
mod commands;
mod error;
mod logging;
mod session;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(err) = run() {
        ui::error(err.to_string());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.command.verbose());

    match cli.command {
        Commands::Status(args) => commands::status::run(args),
        Commands::Connect(args) => commands::connect::run(args),
        Commands::Wave(args) => commands::wave::run(args),
        Commands::Logs(args) => commands::logs::run(args),
        Commands::Interactive(args) => commands::interactive::run(args),
        Commands::InitConfig(args) => commands::init_config::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    }
}
