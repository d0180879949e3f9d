//! CLI command handlers

use anyhow::{Context, Result};
use clap_complete::generate;
use colored::Colorize;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::Path;
use std::time::Duration;

use super::AuthManager;
use crate::browse;
use crate::catalog::{self, MediaKind};
use crate::remote::{GatewayError, Rejection, VaultClient};
use crate::view::ViewCoordinator;

/// Handle the `login` command
pub async fn login(
    url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    force: bool,
) -> Result<()> {
    println!("{}", "Configuring MediaVault credentials...".cyan());

    let creds = AuthManager::authenticate(url, username, password, force).await?;

    println!();
    println!("{}", "Login successful!".green().bold());
    println!("  Server: {}", creds.url);
    println!("  User: {}", creds.username);
    println!();
    println!("Credentials stored securely in system keyring.");

    Ok(())
}

/// Handle the `logout` command
pub fn logout() -> Result<()> {
    AuthManager::clear()?;
    println!("{}", "Credentials cleared.".green());
    Ok(())
}

/// Build a coordinator from stored credentials
fn coordinator() -> Result<ViewCoordinator<VaultClient>> {
    let creds = AuthManager::load().map_err(|_| {
        anyhow::anyhow!("No credentials found. Run 'mediavault login' first to configure.")
    })?;

    let client = VaultClient::new(&creds.url)?;
    Ok(ViewCoordinator::new(client))
}

fn print_items(items: &[crate::catalog::MediaItem]) {
    if items.is_empty() {
        println!("{}", "No items.".yellow());
        return;
    }
    for item in items {
        println!("  {} {}", format!("[{}]", item.kind).dimmed(), item.name);
    }
}

/// Handle the `browse` command
pub async fn browse_catalog() -> Result<()> {
    let mut coordinator = coordinator()?;

    println!("{}", "Connecting to MediaVault server...".cyan());
    coordinator.init().await?;
    println!("{}", "Connected!".green());

    browse::run_browser(coordinator).await
}

/// Handle the `list` command
pub async fn list_kind(kind: MediaKind, query: Option<String>) -> Result<()> {
    let mut coordinator = coordinator()?;
    coordinator.browse_kind(kind).await?;

    let query = query.unwrap_or_default();
    let matched = catalog::search::filter(coordinator.items(), &query);

    println!("{}", kind.label().bold());
    if matched.is_empty() {
        println!("{}", "No items.".yellow());
    } else {
        for item in matched {
            println!("  {}", item.name);
        }
    }
    Ok(())
}

/// Handle the `bookmarks` command
pub async fn bookmarks() -> Result<()> {
    let mut coordinator = coordinator()?;
    coordinator.go_bookmarks().await?;

    println!("{}", "Bookmarks".bold());
    print_items(coordinator.items());
    Ok(())
}

/// Handle the `lists` command
pub async fn lists(name: Option<String>) -> Result<()> {
    let mut coordinator = coordinator()?;

    match name {
        Some(name) => {
            coordinator.browse_list(&name).await?;
            println!("{}", name.bold());
            print_items(coordinator.items());
        }
        None => {
            coordinator.init().await?;
            if coordinator.lists().is_empty() {
                println!("{}", "No lists yet.".yellow());
                println!(
                    "Create one with {}.",
                    "mediavault create-list <name>".cyan()
                );
            } else {
                println!("{}", "Lists".bold());
                for list in coordinator.lists() {
                    println!("  {}", list);
                }
            }
        }
    }
    Ok(())
}

/// Handle the `upload` command
pub async fn upload(file: &Path, kind: Option<MediaKind>) -> Result<()> {
    let filename = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("'{}' has no usable filename", file.display()))?
        .to_string();

    let kind = kind.unwrap_or_else(|| catalog::classify(&filename));

    let data = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read '{}'", file.display()))?;

    let mut coordinator = coordinator()?;
    coordinator.browse_kind(kind).await?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Uploading '{}' ({} bytes)...", filename, data.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let stored = coordinator
        .upload(kind, &filename, bytes::Bytes::from(data))
        .await;
    spinner.finish_and_clear();
    let stored = stored?;

    println!(
        "{} '{}' uploaded to {}.",
        "Done:".green().bold(),
        stored,
        kind.label()
    );
    println!("{} item(s) now in {}.", coordinator.items().len(), kind.label());
    Ok(())
}

/// Handle the `delete` command
pub async fn delete(kind: MediaKind, name: &str, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete \"{}\" permanently?", name))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Cancelled.".yellow());
            return Ok(());
        }
    }

    let mut coordinator = coordinator()?;
    coordinator.browse_kind(kind).await?;
    coordinator.delete_item(name).await?;

    println!("{} Deleted \"{}\".", "Done:".green().bold(), name);
    Ok(())
}

/// Handle the `bookmark` command
pub async fn bookmark(kind: MediaKind, name: &str) -> Result<()> {
    let mut coordinator = coordinator()?;
    coordinator.browse_kind(kind).await?;

    match coordinator.bookmark_item(name).await {
        Ok(()) => {
            println!("{} Bookmarked \"{}\".", "Done:".green().bold(), name);
            Ok(())
        }
        Err(GatewayError::Rejected(Rejection::AlreadyBookmarked)) => {
            println!("\"{}\" is already bookmarked.", name);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Handle the `unbookmark` command
pub async fn unbookmark(kind: MediaKind, name: &str) -> Result<()> {
    let mut coordinator = coordinator()?;
    coordinator.remove_bookmark(kind, name).await?;

    println!("{} Removed bookmark \"{}\".", "Done:".green().bold(), name);
    Ok(())
}

/// Handle the `add` command
pub async fn add(list: &str, name: &str) -> Result<()> {
    let mut coordinator = coordinator()?;
    coordinator.init().await?;

    if !coordinator.store().has_list(list) {
        anyhow::bail!(
            "No list named '{}'. Run 'mediavault lists' to see available lists.",
            list
        );
    }

    coordinator.add_to_list(list, name).await?;
    println!(
        "{} Added \"{}\" to \"{}\".",
        "Done:".green().bold(),
        name,
        list
    );
    Ok(())
}

/// Handle the `remove` command
pub async fn remove(list: &str, name: &str) -> Result<()> {
    let mut coordinator = coordinator()?;
    coordinator.browse_list(list).await?;
    coordinator.remove_from_list(name).await?;

    println!(
        "{} Removed \"{}\" from \"{}\".",
        "Done:".green().bold(),
        name,
        list
    );
    Ok(())
}

/// Handle the `create-list` command
pub async fn create_list(name: &str) -> Result<()> {
    let mut coordinator = coordinator()?;

    match coordinator.create_list(name).await {
        Ok(()) => {
            println!("{} Created list \"{}\".", "Done:".green().bold(), name);
            Ok(())
        }
        Err(GatewayError::Rejected(Rejection::DuplicateName)) => {
            anyhow::bail!("A list named '{}' already exists.", name)
        }
        Err(err) => Err(err.into()),
    }
}

/// Handle the `delete-list` command
pub async fn delete_list(name: &str, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete list \"{}\"? This cannot be undone.", name))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Cancelled.".yellow());
            return Ok(());
        }
    }

    let mut coordinator = coordinator()?;
    coordinator.delete_list(name).await?;

    println!("{} Deleted list \"{}\".", "Done:".green().bold(), name);
    Ok(())
}

/// Handle the `completion` command
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = super::Cli::command();
    generate(shell, &mut cmd, "mediavault", &mut io::stdout());
}

// Extension trait for Cli to get clap Command
impl super::Cli {
    fn command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}
