use tokio::runtime::{Builder, Runtime};
use wave_portal::{
    rpc::{self, RpcWallet, RpcWavePortal},
    PortalConfig, RestoreOutcome, ViewController,
};

use crate::{cli::PortalOptions, error::Result, ui};

pub type Controller = ViewController<RpcWallet, RpcWavePortal>;

pub fn load_config(options: &PortalOptions) -> Result<PortalConfig> {
    let path = options
        .config
        .clone()
        .unwrap_or_else(PortalConfig::default_path);
    let mut config = PortalConfig::load_or_default(&path)?;

    if let Some(rpc_url) = &options.rpc_url {
        config.rpc_url.clone_from(rpc_url);
    }
    if let Some(contract) = &options.contract {
        config.contract_address.clone_from(contract);
    }

    config.validate()?;
    Ok(config)
}

pub fn runtime() -> Result<Runtime> {
    Ok(Builder::new_current_thread().enable_all().build()?)
}

/// Builds the controller and restores any earlier authorization, the way a
/// page does on load.
pub async fn open(options: &PortalOptions) -> Result<Controller> {
    let config = load_config(options)?;
    let (wallet, contract) = rpc::connect(&config)?;

    if options.verbose {
        ui::status(format!(
            "Using contract {} at {}",
            contract.address(),
            config.rpc_url
        ));
    }

    let mut controller = ViewController::new(wallet, contract);
    if let RestoreOutcome::Restored { account, .. } = controller.restore_session().await {
        if options.verbose {
            ui::status(format!("Restored account {account}"));
        }
    }
    Ok(controller)
}
