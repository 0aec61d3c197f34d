use crate::{cli::ViewArgs, error::Result, session, ui};

pub fn run(args: ViewArgs) -> Result<()> {
    session::runtime()?.block_on(async {
        let mut controller = session::open(&args.portal).await?;
        let outcome = controller.refresh_event_log().await;

        super::show_outcome(&controller, args.json, &outcome)?;
        let count = outcome?;

        if count == 0 && !args.json {
            ui::status("No waves yet");
        }
        Ok(())
    })
}
