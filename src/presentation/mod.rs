//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the orchestrator with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Wires adapters into the orchestrator (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use remote_edit::presentation::factory;
//!
//! let loaded = factory::load_config(&workspace_root, cli_overrides)?;
//! let orchestrator = factory::create_sync_orchestrator(&loaded, factory::create_editor(true, false));
//! let outcome = orchestrator.run_download(&ctx, &request)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, RemoteArgs};
pub use factory::{create_editor, create_sync_orchestrator, load_config, ConcreteSyncOrchestrator};
