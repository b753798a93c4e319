use proptest::prelude::*;
use tether_core::config::TetherConfig;

fn with_scheme(scheme: &str) -> TetherConfig {
    let mut config = TetherConfig::default();
    config.content.scheme = scheme.to_string();
    config
}

proptest! {
    #[test]
    fn well_formed_schemes_validate(scheme in "[a-z][a-z0-9+.-]{0,15}") {
        prop_assert!(with_scheme(&scheme).validate().is_ok());
    }

    #[test]
    fn schemes_with_separators_are_rejected(
        head in "[a-z]{1,8}",
        sep in prop::sample::select(vec![":", "/", " ", "?", "#"]),
        tail in "[a-z]{0,8}",
    ) {
        let scheme = format!("{head}{sep}{tail}");
        prop_assert!(with_scheme(&scheme).validate().is_err());
    }

    #[test]
    fn numeric_ttl_override_always_applies(secs in any::<u64>()) {
        let mut config = TetherConfig::default();
        let value = secs.to_string();
        config.apply_overrides(|key| (key == "TETHER_PENDING_TTL_SECS").then(|| value.clone()));
        prop_assert_eq!(config.ledger.pending_ttl_secs, secs);
    }
}
