//! mediavault - Browse and organize media on a MediaVault server

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod browse;
mod catalog;
mod cli;
mod remote;
mod store;
mod view;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "mediavault=debug,reqwest=debug"
    } else {
        "mediavault=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Login {
            url,
            username,
            password,
            force,
        } => {
            cli::commands::login(url, username, password, force).await?;
        }
        Commands::Logout => {
            cli::commands::logout()?;
        }
        Commands::Browse => {
            cli::commands::browse_catalog().await?;
        }
        Commands::List { kind, query } => {
            cli::commands::list_kind(kind, query).await?;
        }
        Commands::Bookmarks => {
            cli::commands::bookmarks().await?;
        }
        Commands::Lists { name } => {
            cli::commands::lists(name).await?;
        }
        Commands::Upload { file, kind } => {
            cli::commands::upload(&file, kind).await?;
        }
        Commands::Delete { kind, name, yes } => {
            cli::commands::delete(kind, &name, yes).await?;
        }
        Commands::Bookmark { kind, name } => {
            cli::commands::bookmark(kind, &name).await?;
        }
        Commands::Unbookmark { kind, name } => {
            cli::commands::unbookmark(kind, &name).await?;
        }
        Commands::Add { list, name } => {
            cli::commands::add(&list, &name).await?;
        }
        Commands::Remove { list, name } => {
            cli::commands::remove(&list, &name).await?;
        }
        Commands::CreateList { name } => {
            cli::commands::create_list(&name).await?;
        }
        Commands::DeleteList { name, yes } => {
            cli::commands::delete_list(&name, yes).await?;
        }
        Commands::Completion { shell } => {
            cli::commands::completion(shell);
        }
    }

    Ok(())
}
