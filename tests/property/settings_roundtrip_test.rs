//! Property-based tests for Settings Engine persistence.
//!
//! Arbitrary settings saved through `set_value` must load back identically
//! from a fresh engine pointed at the same file.

use pageview::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use pageview::types::settings::{BrowserSettings, NetworkSettings, StorageSettings};
use proptest::prelude::*;
use serde_json::json;

fn arb_settings() -> impl Strategy<Value = BrowserSettings> {
    (
        "[a-zA-Z][a-zA-Z0-9/._-]{0,20}",
        1u64..600,
        any::<bool>(),
        proptest::option::of("/[a-z]{1,8}/[a-z]{1,8}\\.db"),
    )
        .prop_map(|(user_agent, timeout_secs, use_system_proxy, database_file)| {
            BrowserSettings {
                network: NetworkSettings {
                    user_agent,
                    timeout_secs,
                    use_system_proxy,
                },
                storage: StorageSettings { database_file },
            }
        })
}

// **Property: settings round-trip through disk**
proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn settings_roundtrip(settings in arb_settings()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine.set_value("network", json!(settings.network)).unwrap();
        engine.set_value("storage", json!(settings.storage)).unwrap();
        prop_assert_eq!(engine.get_settings(), &settings);

        let mut reloaded = SettingsEngine::new(Some(path));
        prop_assert_eq!(reloaded.load().unwrap(), settings);
    }
}
