use tokio::io::{self, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::{cli::PortalOptions, error::Result, session, ui};

const HELP: &str = "actions: connect | wave [message] | logs | status | help | quit";

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Connect,
    Wave(Option<String>),
    Logs,
    Status,
    Help,
    Quit,
}

fn parse_action(line: &str) -> std::result::Result<Option<Action>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let action = match verb {
        "connect" => Action::Connect,
        "wave" => Action::Wave((!rest.is_empty()).then(|| rest.to_string())),
        "logs" => Action::Logs,
        "status" => Action::Status,
        "help" | "?" => Action::Help,
        "quit" | "exit" => Action::Quit,
        other => return Err(format!("unknown action '{other}'")),
    };
    Ok(Some(action))
}

pub fn run(args: PortalOptions) -> Result<()> {
    session::runtime()?.block_on(async {
        let mut controller = session::open(&args).await?;
        let mut lines = BufReader::new(io::stdin()).lines();

        super::show(&controller, false)?;
        ui::status(HELP);

        while let Some(line) = lines.next_line().await? {
            let action = match parse_action(&line) {
                Ok(Some(action)) => action,
                Ok(None) => continue,
                Err(message) => {
                    ui::warn(format!("{message}; {HELP}"));
                    continue;
                }
            };

            match action {
                Action::Connect => {
                    if let Err(err) = controller.connect().await {
                        alert(&mut lines, &err.to_string()).await?;
                    }
                }
                Action::Wave(message) => {
                    // Failures land in the page notice.
                    let accepted = controller.begin_wave(message.as_deref()).await;
                    if let Ok(pending) = accepted {
                        super::show(&controller, false)?;
                        let _ = controller.finish_wave(&pending).await;
                    }
                }
                Action::Logs => {
                    let _ = controller.refresh_event_log().await;
                }
                Action::Status => {}
                Action::Help => {
                    ui::status(HELP);
                    continue;
                }
                Action::Quit => break,
            }

            super::show(&controller, false)?;
        }

        Ok(())
    })
}

/// Shows `message` and waits until the visitor acknowledges it.
async fn alert(lines: &mut Lines<BufReader<Stdin>>, message: &str) -> Result<()> {
    ui::error(message);
    ui::status("press Enter to continue");
    lines.next_line().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wave_with_message() {
        assert_eq!(
            parse_action("wave  hello there ").expect("valid"),
            Some(Action::Wave(Some("hello there".to_string())))
        );
    }

    #[test]
    fn parses_bare_wave_without_message() {
        assert_eq!(parse_action("wave").expect("valid"), Some(Action::Wave(None)));
    }

    #[test]
    fn skips_blank_lines() {
        assert_eq!(parse_action("   ").expect("valid"), None);
    }

    #[test]
    fn accepts_exit_aliases() {
        assert_eq!(parse_action("exit").expect("valid"), Some(Action::Quit));
        assert_eq!(parse_action("quit").expect("valid"), Some(Action::Quit));
    }

    #[test]
    fn rejects_unknown_actions() {
        let err = parse_action("dance").expect_err("unknown");
        assert!(err.contains("dance"));
    }
}
