//! Property tests for remote-to-local path mapping.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use remote_edit::domain::services::{
    join_remote, map_download, remote_target_for, LocalTarget,
};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,11}").unwrap()
}

fn relative_remote_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=5).prop_map(|segments| segments.join("/"))
}

fn remote_root() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("~".to_string()),
        Just("/".to_string()),
        Just("/srv/app/".to_string()),
        proptest::string::string_regex("/[a-z]{1,8}(/[a-z]{1,8}){0,2}/{0,2}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Relative downloads always land inside the workspace.
    #[test]
    fn property_relative_download_stays_in_workspace(
        root in remote_root(),
        path in relative_remote_path()
    ) {
        let workspace = Path::new("/ws");
        let mapping = map_download(workspace, &root, &path).unwrap();

        match mapping.local {
            LocalTarget::Derived(dir) => prop_assert!(dir.starts_with(workspace)),
            LocalTarget::UserSelected => prop_assert!(false, "relative path asked for a folder"),
        }
        prop_assert_eq!(mapping.remote_file, join_remote(&root, &path));
    }

    /// PROPERTY: Absolute downloads are passed through and need a folder.
    #[test]
    fn property_absolute_download_is_user_selected(path in relative_remote_path()) {
        let absolute = format!("/{path}");
        let mapping = map_download(Path::new("/ws"), "~", &absolute).unwrap();

        prop_assert_eq!(mapping.local, LocalTarget::UserSelected);
        prop_assert_eq!(mapping.remote_file, absolute);
    }

    /// PROPERTY: Any `..` directory segment is rejected.
    #[test]
    fn property_parent_segment_is_rejected(
        before in proptest::collection::vec(segment(), 0..3),
        after in proptest::collection::vec(segment(), 1..3)
    ) {
        let mut segments = before;
        segments.push("..".to_string());
        segments.extend(after);
        let path = segments.join("/");

        prop_assert!(map_download(Path::new("/ws"), "~", &path).is_err());
    }

    /// PROPERTY: Trailing separators on the root never double up.
    #[test]
    fn property_join_ignores_trailing_root_separators(
        root in "/[a-z]{1,8}",
        extra in 0usize..4,
        path in relative_remote_path()
    ) {
        let padded = format!("{root}{}", "/".repeat(extra));
        prop_assert_eq!(join_remote(&padded, &path), format!("{root}/{path}"));
    }

    /// PROPERTY: Upload targets mirror the relative path segment by segment.
    #[test]
    fn property_upload_target_mirrors_segments(
        segments in proptest::collection::vec(segment(), 1..5)
    ) {
        let relative: PathBuf = segments.iter().collect();
        prop_assert_eq!(
            remote_target_for("/srv/app", &relative),
            format!("/srv/app/{}", segments.join("/"))
        );
    }
}
