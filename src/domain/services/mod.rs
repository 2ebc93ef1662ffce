//! Domain Services
//!
//! Stateless path logic shared by the download and upload flows.

pub mod local_path_mapper;

pub use local_path_mapper::{
    ensure_local_dir, join_remote, map_download, remote_target_for, resolve_local_dir,
    to_remote_separators, LocalTarget, PathEscape, PathMapping,
};
