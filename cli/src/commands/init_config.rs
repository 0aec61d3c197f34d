use wave_portal::PortalConfig;

use crate::{
    cli::InitConfigArgs,
    error::{CliError, Result},
    ui,
};

pub fn run(args: InitConfigArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(CliError::PathAlreadyExists(args.path));
    }

    let mut config = PortalConfig::default();
    if let Some(rpc_url) = args.rpc_url {
        config.rpc_url = rpc_url;
    }
    if let Some(contract) = args.contract {
        config.contract_address = contract;
    }
    config.validate()?;
    config.save(&args.path)?;

    ui::success(format!("Wrote {}", args.path.display()));
    Ok(())
}
