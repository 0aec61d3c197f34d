use crate::{cli::ViewArgs, error::Result, session};

pub fn run(args: ViewArgs) -> Result<()> {
    session::runtime()?.block_on(async {
        let controller = session::open(&args.portal).await?;
        super::show(&controller, args.json)
    })
}
