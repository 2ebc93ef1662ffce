//! Transfer Client Implementations

mod scp;

pub use scp::{quote_remote_path, remote_spec, ScpClient};
