use crate::{cli::WaveArgs, error::Result, session, ui};

pub fn run(args: WaveArgs) -> Result<()> {
    session::runtime()?.block_on(async {
        let mut controller = session::open(&args.view.portal).await?;

        let accepted = controller.begin_wave(args.message.as_deref()).await;
        let outcome = match accepted {
            Ok(pending) => {
                // JSON output carries the settled page only.
                if !args.view.json {
                    super::show(&controller, false)?;
                }
                controller.finish_wave(&pending).await
            }
            Err(err) => Err(err),
        };

        super::show_outcome(&controller, args.view.json, &outcome)?;
        let confirmation = outcome?;

        if args.view.portal.verbose {
            let block = confirmation
                .block_number
                .map_or_else(|| "unknown block".to_string(), |n| format!("block {n}"));
            ui::success(format!("Mined {} in {block}", confirmation.tx_hash));
        }
        Ok(())
    })
}
