use std::time::Duration;
use wb_adapter::utils::validation::Validate;
use wb_adapter::{AdapterConfig, AdapterError};

const VARS: [&str; 6] = [
    "WB_HOST",
    "WATERBUTLER_OSF_TOKEN",
    "OSF_NODE",
    "WB_PROVIDER",
    "WB_PARENT_FOLDER",
    "WB_TIMEOUT_SECONDS",
];

// Single test: the process environment is shared between tests in this binary.
#[test]
fn test_adapter_config_from_env() {
    for var in VARS {
        std::env::remove_var(var);
    }

    match AdapterConfig::from_env() {
        Err(AdapterError::MissingConfigError { field }) => assert_eq!(field, "WB_HOST"),
        other => panic!("unexpected result: {:?}", other),
    }

    std::env::set_var("WB_HOST", "https://files.osf.io");
    std::env::set_var("WATERBUTLER_OSF_TOKEN", "env-token");
    std::env::set_var("OSF_NODE", "n0de1");

    let config = AdapterConfig::from_env().unwrap();
    assert_eq!(config.provider_name, "osfstorage");
    assert_eq!(config.parent_folder, None);
    assert_eq!(config.default_credential, "env-token");
    assert!(config.validate().is_ok());

    std::env::set_var("WB_PROVIDER", "s3");
    std::env::set_var("WB_PARENT_FOLDER", "/bucket-dir/");
    std::env::set_var("WB_TIMEOUT_SECONDS", "45");

    let config = AdapterConfig::from_env().unwrap();
    assert_eq!(config.provider_name, "s3");
    assert_eq!(config.parent_folder.as_deref(), Some("/bucket-dir/"));
    assert_eq!(config.request_timeout, Some(Duration::from_secs(45)));

    std::env::set_var("WB_TIMEOUT_SECONDS", "soon");
    assert!(matches!(
        AdapterConfig::from_env(),
        Err(AdapterError::InvalidConfigValueError { .. })
    ));

    for var in VARS {
        std::env::remove_var(var);
    }
}
