//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, -C) are inherited by all subcommands
//! - Positional arguments and flags pre-answer the matching prompt

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ColorMode, RemoteConfig};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// remote-edit - fetch a remote file over scp, edit it locally, push it back
#[derive(Parser, Debug)]
#[command(name = "remote-edit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Configuration: .remote-edit.toml in the workspace, or ~/.config/remote-edit/config.toml")]
pub struct Cli {
    /// Emit NDJSON events instead of styled text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Workspace root (defaults to the nearest ancestor with .remote-edit.toml or .git)
    #[arg(short = 'C', long = "workspace", global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection flags shared by download and upload
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteArgs {
    /// Remote host
    #[arg(long)]
    pub host: Option<String>,

    /// Remote user
    #[arg(long)]
    pub user: Option<String>,

    /// Base directory on the remote host for relative paths
    #[arg(long, value_name = "DIR")]
    pub root_dir: Option<String>,

    /// SSH port
    #[arg(long)]
    pub port: Option<u16>,
}

impl RemoteArgs {
    /// Flags as a config layer; empty strings count as unset
    pub fn as_overrides(&self) -> RemoteConfig {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        RemoteConfig {
            host: non_empty(&self.host),
            user: non_empty(&self.user),
            root_dir: non_empty(&self.root_dir),
            port: self.port,
            identity_file: None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a remote file into the workspace and open it
    Download {
        /// Remote file path, relative to the root directory or absolute
        remote_path: Option<String>,

        #[command(flatten)]
        remote: RemoteArgs,

        /// Local folder for absolute remote paths (skips the folder prompt)
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,

        /// Print the downloaded path instead of opening an editor
        #[arg(long)]
        no_open: bool,
    },

    /// Upload a local file to the remote host
    Upload {
        /// Local file (defaults to $REMOTE_EDIT_ACTIVE_FILE)
        file: Option<PathBuf>,

        #[command(flatten)]
        remote: RemoteArgs,

        /// Remote directory when no root directory is configured
        #[arg(long, value_name = "DIR")]
        remote_dir: Option<String>,
    },

    /// Show the resolved configuration and where it came from
    Config,
}
