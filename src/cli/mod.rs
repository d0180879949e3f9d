//! CLI module for mediavault

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::MediaKind;

pub mod auth;
pub mod commands;

pub use auth::AuthManager;

#[derive(Parser, Debug)]
#[command(name = "mediavault", about = "Browse and organize media on a MediaVault server")]
#[command(version, author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure MediaVault server credentials
    Login {
        /// MediaVault server URL
        #[arg(long, env = "MEDIAVAULT_URL")]
        url: Option<String>,

        /// Username
        #[arg(short, long, env = "MEDIAVAULT_USER")]
        username: Option<String>,

        /// Password
        #[arg(short, long, env = "MEDIAVAULT_PASS")]
        password: Option<String>,

        /// Force re-authentication (ignore stored credentials)
        #[arg(long)]
        force: bool,
    },

    /// Clear stored credentials
    Logout,

    /// Interactively browse the catalog
    Browse,

    /// List items of a media kind
    List {
        /// Media kind (music, video, photo)
        kind: MediaKind,

        /// Filter items by substring
        #[arg(short, long)]
        query: Option<String>,
    },

    /// List all bookmarked items
    Bookmarks,

    /// Show user-defined lists, or the contents of one
    Lists {
        /// List name (omit to show all list names)
        name: Option<String>,
    },

    /// Upload a file to the store
    Upload {
        /// Local file to upload
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Media kind (inferred from the filename if omitted)
        #[arg(short, long)]
        kind: Option<MediaKind>,
    },

    /// Permanently delete an item from the store
    Delete {
        /// Media kind of the item
        kind: MediaKind,

        /// Item name
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Bookmark an item
    Bookmark {
        kind: MediaKind,
        name: String,
    },

    /// Remove a bookmark
    Unbookmark {
        kind: MediaKind,
        name: String,
    },

    /// Add an item to a user-defined list
    Add {
        /// List name
        list: String,
        /// Item name
        name: String,
    },

    /// Remove an item from a user-defined list
    Remove {
        /// List name
        list: String,
        /// Item name
        name: String,
    },

    /// Create a new user-defined list
    CreateList {
        name: String,
    },

    /// Delete a user-defined list
    DeleteList {
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
