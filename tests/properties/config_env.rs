//! Property tests for environment overrides.

use proptest::prelude::*;

use remote_edit::config::{with_env_overrides, Config};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A port value is accepted exactly when its trimmed form is a u16.
    #[test]
    fn property_port_accepted_iff_u16(value in "(?s).{1,8}") {
        let result = with_env_overrides(Config::default(), |key| {
            (key == "REMOTE_EDIT_PORT").then(|| value.clone())
        });
        match value.trim().parse::<u16>() {
            Ok(port) => prop_assert_eq!(result.unwrap().remote.port, Some(port)),
            Err(_) => prop_assert!(result.is_err()),
        }
    }

    /// PROPERTY: Parsing arbitrary TOML never panics.
    #[test]
    fn property_config_parse_never_panics(text in "(?s).{0,256}") {
        let _ = toml::from_str::<Config>(&text);
    }
}
