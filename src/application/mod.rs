//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain path rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncOrchestrator` - Download and upload flows

pub mod sync;

pub use sync::{
    resolve_config, DownloadRequest, SyncContext, SyncOrchestrator, SyncOutcome, UploadRequest,
};
