#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use remote_edit::domain::services::{map_download, LocalTarget};

fuzz_target!(|data: &[u8]| {
    let Ok(path) = std::str::from_utf8(data) else {
        return;
    };

    let workspace = Path::new("/ws");
    match map_download(workspace, "~", path) {
        Ok(mapping) => {
            if let LocalTarget::Derived(dir) = mapping.local {
                assert!(dir.starts_with(workspace));
            }
        }
        Err(_) => assert!(!path.starts_with('/')),
    }
});
