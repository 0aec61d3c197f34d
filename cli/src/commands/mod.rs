pub mod completions;
pub mod connect;
pub mod init_config;
pub mod interactive;
pub mod logs;
pub mod status;
pub mod wave;

use wave_portal::{render, Page};

use crate::{error::Result, session::Controller, ui};

fn show(controller: &Controller, json: bool) -> Result<()> {
    print(&render(controller.state()), json)
}

/// Shows the page after a one-shot operation. `main` reports a failed one,
/// so the page leaves its notice out.
fn show_outcome<T>(
    controller: &Controller,
    json: bool,
    outcome: &wave_portal::Result<T>,
) -> Result<()> {
    let mut page = render(controller.state());
    if outcome.is_err() {
        page.notice = None;
    }
    print(&page, json)
}

fn print(page: &Page, json: bool) -> Result<()> {
    if json {
        ui::json(page)
    } else {
        ui::page(page);
        Ok(())
    }
}
