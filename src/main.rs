//! remote-edit CLI - edit remote files locally over scp
//!
//! Usage: remote-edit <COMMAND>
//!
//! Commands:
//!   download  Download a remote file into the workspace and open it
//!   upload    Upload a local file to the remote host
//!   config    Show the resolved configuration

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use remote_edit::presentation::{Cli, Commands};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod ui;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            ui::error::print_error(&e, json);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` is debug and `-vv` is trace.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<u8> {
    let workspace = cli.workspace.as_deref();

    let code = match cli.command {
        Commands::Download {
            remote_path,
            remote,
            dest,
            no_open,
        } => commands::download::cmd_download(
            remote_path,
            &remote,
            dest,
            no_open,
            cli.json,
            cli.color,
            workspace,
        )?,
        Commands::Upload {
            file,
            remote,
            remote_dir,
        } => commands::upload::cmd_upload(file, &remote, remote_dir, cli.json, cli.color, workspace)?,
        Commands::Config => {
            commands::config::cmd_config(cli.json, cli.color, workspace)?;
            0
        }
    };

    Ok(code)
}
