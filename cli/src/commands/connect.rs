use crate::{cli::PortalOptions, error::Result, session, ui};

pub fn run(args: PortalOptions) -> Result<()> {
    session::runtime()?.block_on(async {
        let mut controller = session::open(&args).await?;
        let account = controller.connect().await?;

        ui::success(format!("Connected {account}"));
        super::show(&controller, false)
    })
}
