//! Domain Layer
//!
//! Pure path logic and the collaborator interfaces, without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Remote paths and per-run configuration
//! - `services/` - Local/remote path mapping
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Path mapping is total and deterministic
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
