//! Property tests for remote path splitting and quoting.

use proptest::prelude::*;

use remote_edit::domain::value_objects::{is_absolute, split_remote_path, RemotePathSpec};
use remote_edit::infrastructure::transfer::quote_remote_path;

fn separator() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/".to_string()),
        Just("::".to_string()),
        Just("\\".to_string()),
        proptest::string::string_regex("[a-z/]{1,3}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Splitting never panics, even on multi-byte input.
    #[test]
    fn property_split_never_panics(
        path in "(?s).{0,128}",
        sep in "(?s).{0,3}"
    ) {
        let _ = split_remote_path(&path, &sep);
    }

    /// PROPERTY: Directory, separator and filename reassemble the input.
    #[test]
    fn property_split_reassembles(
        path in "[a-z./~ -]{0,48}",
        sep in separator()
    ) {
        let (directory, filename) = split_remote_path(&path, &sep);
        if path.contains(sep.as_str()) {
            prop_assert_eq!(format!("{directory}{sep}{filename}"), path);
        } else {
            prop_assert_eq!(directory, "");
            prop_assert_eq!(filename, path.as_str());
        }
    }

    /// PROPERTY: The filename never contains the separator.
    #[test]
    fn property_filename_has_no_separator(
        path in "[a-z./:\\\\]{0,48}",
        sep in separator()
    ) {
        let (_, filename) = split_remote_path(&path, &sep);
        prop_assert!(!filename.contains(sep.as_str()));
    }

    /// PROPERTY: Absoluteness is exactly "starts with /".
    #[test]
    fn property_absolute_iff_leading_slash(path in "(?s).{0,64}") {
        prop_assert_eq!(is_absolute(&path), path.starts_with('/'));
        prop_assert_eq!(RemotePathSpec::parse(path.clone()).is_absolute(), path.starts_with('/'));
    }

    /// PROPERTY: A home-relative path keeps `~/` outside the quotes.
    #[test]
    fn property_quote_keeps_tilde_prefix(rest in "[A-Za-z0-9 ._'-]{1,32}") {
        let quoted = quote_remote_path(&format!("~/{rest}"));
        prop_assert!(quoted.starts_with("~/'"), "quoted: {}", quoted);
        prop_assert!(quoted.ends_with('\''));
    }

    /// PROPERTY: Quoting round-trips through POSIX single-quote rules.
    #[test]
    fn property_quote_round_trips(path in "/[A-Za-z0-9 ._'\"$*-]{0,32}") {
        let quoted = quote_remote_path(&path);
        prop_assert_eq!(unquote(&quoted), path);
    }
}

/// Undo single-quote shell quoting (only what `quote_remote_path` produces)
fn unquote(quoted: &str) -> String {
    let mut out = String::new();
    let mut in_quotes = false;
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('\'', _) => in_quotes = !in_quotes,
            ('\\', false) => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            (c, _) => out.push(c),
        }
    }
    out
}
