use colored::Colorize;
use wave_portal::{page::CONNECT_WALLET, Page};

pub fn status(message: impl AsRef<str>) {
    eprintln!("{} {}", "==>".blue().bold(), message.as_ref());
}

pub fn success(message: impl AsRef<str>) {
    eprintln!("{} {}", "ok".green().bold(), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", "warn".yellow().bold(), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{} {}", "error".red().bold(), message.as_ref());
}

pub fn page(page: &Page) {
    println!("{}", page.header.bold());
    println!("{}", page.bio);
    println!("{}", page.prompt.dimmed());

    if let Some(account) = &page.account {
        println!("{} {}", "Connected:".dimmed(), account);
    }
    if page.spinner {
        println!("{}", "Mining...".cyan());
    }
    if let Some(confirmation) = page.confirmation {
        println!("{}", confirmation.magenta().bold());
    }
    if let Some(count) = page.running_count {
        println!("Number of frens so far: {}", count.to_string().bold());
    }
    if page.connect_wallet {
        println!("[{}] run `wave-portal connect`", CONNECT_WALLET.green());
    }
    for card in &page.events {
        println!();
        println!("{} {}", "Address:".dimmed(), card.address);
        println!("{} {}", "Time:".dimmed(), card.time);
        println!("{} {}", "Message:".dimmed(), card.message);
    }
    if let Some(notice) = &page.notice {
        warn(notice);
    }
}

pub fn json<T: serde::Serialize>(value: &T) -> crate::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
