//! Terminal harness driving the stores over file-backed storage.
//!
//! The binary only parses arguments, loads settings and forwards here, so
//! every command is testable without spawning a process.

use std::io::{self, Write};
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::app_state::{AppPorts, AppState};
use crate::config::{ClientSettings, ProxySettings};
use crate::domain::ports::{FixedColorScheme, FixtureCredentialVerifier};
use crate::domain::{Activity, Error};
use crate::outbound::document::DocumentClassList;
use crate::outbound::storage::FileKeyValueStore;
use crate::views::{ActivityFeed, FeedBody, activity_feed::VERIFIED_LABEL};

/// Command-line interface of the `handreceipt` harness.
#[derive(Debug, Parser)]
#[command(name = "handreceipt", about = "Drive the HandReceipt client core from a terminal")]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Harness subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Sign in and persist the session.
    Login {
        /// Username exactly as typed.
        #[arg(long)]
        username: String,
        /// Password exactly as typed.
        #[arg(long)]
        password: String,
    },
    /// Sign out and delete the persisted session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Flip between light and dark.
    ToggleTheme,
    /// Flip the sidebar collapsed flag.
    ToggleSidebar,
    /// Print the current preferences as JSON.
    Preferences,
    /// Render the dashboard feed for a JSON activity log.
    Feed {
        /// File holding a JSON array of activities, newest first.
        file: Utf8PathBuf,
    },
    /// Show where the dev server sends a request path.
    ProxyTarget {
        /// Request path, e.g. `/api/transfers`.
        path: String,
    },
}

/// Errors surfaced by harness commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A store operation failed.
    #[error("{0}")]
    Domain(#[from] Error),
    /// The storage directory could not be opened.
    #[error("failed to open storage at {path}: {source}")]
    Storage {
        /// Storage directory.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// An input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Input file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// An input file was not a valid activity log.
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// Input file.
        path: Utf8PathBuf,
        /// Decoder message.
        message: String,
    },
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Execute `command`, writing user-facing text to `out`.
pub fn run(
    command: &Command,
    client: &ClientSettings,
    proxy: &ProxySettings,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::ProxyTarget { path } => {
            let rule = proxy.rule();
            match rule.forward(path) {
                Some(url) => writeln!(out, "{path} -> {url}")?,
                None => writeln!(
                    out,
                    "{path} is served by the dev server on port {}",
                    proxy.dev_port()
                )?,
            }
            Ok(())
        }
        Command::Feed { file } => render_feed(&read_activities(file)?, out),
        stateful => {
            let mut state = open_state(client)?;
            run_stateful(stateful, &mut state, out)
        }
    }
}

fn run_stateful(
    command: &Command,
    state: &mut AppState,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::Login { username, password } => {
            let user = state.session.login(username, password)?;
            writeln!(out, "Signed in as {} ({})", user.name(), user.rank())?;
        }
        Command::Logout => {
            state.session.logout()?;
            writeln!(out, "Signed out")?;
        }
        Command::Whoami => match state.session.user() {
            Some(user) => writeln!(
                out,
                "{} ({}, {})",
                user.name(),
                user.username(),
                user.rank()
            )?,
            None => writeln!(out, "Not signed in")?,
        },
        Command::ToggleTheme => {
            let theme = state.preferences.toggle_theme()?;
            writeln!(out, "Theme: {theme}")?;
        }
        Command::ToggleSidebar => {
            let collapsed = state.preferences.toggle_sidebar()?;
            writeln!(out, "Sidebar collapsed: {collapsed}")?;
        }
        Command::Preferences => {
            let json = serde_json::to_string_pretty(&state.preferences.preferences())
                .map_err(|err| Error::internal(format!("failed to encode preferences: {err}")))?;
            writeln!(out, "{json}")?;
        }
        Command::Feed { .. } | Command::ProxyTarget { .. } => {}
    }
    Ok(())
}

/// Build application state over the configured storage directory.
pub fn open_state(client: &ClientSettings) -> Result<AppState, CliError> {
    let root = client.storage_dir();
    let storage = FileKeyValueStore::open(&root).map_err(|source| CliError::Storage {
        path: root.clone(),
        source,
    })?;
    let ports = AppPorts {
        verifier: Arc::new(FixtureCredentialVerifier),
        storage: Arc::new(storage),
        color_scheme: Arc::new(FixedColorScheme::new(client.prefers_dark)),
        theme_surface: Arc::new(DocumentClassList::new()),
    };
    Ok(AppState::bootstrap(ports)?)
}

fn read_activities(path: &Utf8Path) -> Result<Vec<Activity>, CliError> {
    let read_error = |source: io::Error| CliError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "path has no file name",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent.as_std_path(), ambient_authority()).map_err(read_error)?;
    let raw = dir.read_to_string(file_name).map_err(read_error)?;
    serde_json::from_str(&raw).map_err(|err| CliError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn render_feed(activities: &[Activity], out: &mut impl Write) -> Result<(), CliError> {
    let feed = ActivityFeed::from_activities(activities);
    match &feed.body {
        FeedBody::Empty { message } => writeln!(out, "{message}")?,
        FeedBody::Rows(rows) => {
            for row in rows {
                if row.verified {
                    writeln!(out, "{} ({}) [{VERIFIED_LABEL}]", row.title, row.timestamp)?;
                } else {
                    writeln!(out, "{} ({})", row.title, row.timestamp)?;
                }
            }
        }
    }
    writeln!(out, "View all: {}", feed.view_all)?;
    Ok(())
}
