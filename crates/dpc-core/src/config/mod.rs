pub mod schema;

use crate::log::Topic;
use std::{cell::RefCell, sync::Arc};
use thiserror::Error as ThisError;

pub use schema::*;

//
// CONFIG
//
// Held per thread so independent builds (and tests) never observe each
// other's settings. Arc keeps handing out snapshots cheap.
//

thread_local! {
    static CONFIG: RefCell<Option<Arc<ConfigModel>>> = const { RefCell::new(None) };
}

/// Errors related to configuration lifecycle and parsing.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("config has already been initialized")]
    AlreadyInitialized,

    #[error("config has not been initialized")]
    NotInitialized,

    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

///
/// Config
///

pub struct Config {}

impl Config {
    pub fn get() -> Result<Arc<ConfigModel>, ConfigError> {
        Self::try_get().ok_or(ConfigError::NotInitialized)
    }

    #[must_use]
    pub fn try_get() -> Option<Arc<ConfigModel>> {
        CONFIG.with(|cfg| cfg.borrow().as_ref().cloned())
    }

    /// The active config, or the defaults if none was initialized.
    #[must_use]
    pub fn current() -> Arc<ConfigModel> {
        Self::try_get().unwrap_or_default()
    }

    /// Initialize the thread's configuration from a TOML string.
    pub fn init_from_toml(config_str: &str) -> Result<(), ConfigError> {
        let config: ConfigModel =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        Self::install(config)?;
        crate::log!(Topic::Config, Debug, "config initialized from toml");

        Ok(())
    }

    /// Test-only: initialize the configuration from an in-memory model.
    #[cfg(test)]
    pub fn init_from_model_for_tests(config: ConfigModel) -> Result<Arc<ConfigModel>, ConfigError> {
        Self::install(config)?;
        Self::get()
    }

    /// Return the current config as a TOML string.
    pub fn to_toml() -> Result<String, ConfigError> {
        let cfg = Self::get()?;

        toml::to_string_pretty(&*cfg).map_err(|e| ConfigError::CannotParseToml(e.to_string()))
    }

    /// Test-only: reset the config so tests can reinitialize with a fresh TOML.
    #[cfg(test)]
    pub fn reset_for_tests() {
        CONFIG.with(|cfg| {
            *cfg.borrow_mut() = None;
        });
    }

    fn install(config: ConfigModel) -> Result<(), ConfigError> {
        config.validate()?;

        CONFIG.with(|cfg| {
            let mut borrow = cfg.borrow_mut();
            if borrow.is_some() {
                return Err(ConfigError::AlreadyInitialized);
            }
            *borrow = Some(Arc::new(config));

            Ok(())
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::Level;

    #[test]
    fn defaults_apply_when_uninitialized() {
        Config::reset_for_tests();

        assert!(matches!(Config::get(), Err(ConfigError::NotInitialized)));
        let cfg = Config::current();
        assert_eq!(cfg.pack.namespace, "dpc");
        assert!(!cfg.pack.dev);
        assert!(cfg.script.header);
    }

    #[test]
    fn init_from_toml_parses_sections() {
        Config::reset_for_tests();
        Config::init_from_toml(
            r#"
            [pack]
            name = "Test Pack"
            namespace = "test"
            dev = true

            [log]
            level = "debug"

            [script]
            header = false
            "#,
        )
        .unwrap();

        let cfg = Config::get().unwrap();
        assert_eq!(cfg.pack.name, "Test Pack");
        assert_eq!(cfg.pack.namespace, "test");
        assert!(cfg.pack.dev);
        assert_eq!(cfg.log.level, Level::Debug);
        assert!(!cfg.script.header);

        Config::reset_for_tests();
    }

    #[test]
    fn double_init_is_rejected() {
        Config::reset_for_tests();
        Config::init_from_toml("").unwrap();

        let err = Config::init_from_toml("").unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyInitialized));

        Config::reset_for_tests();
    }

    #[test]
    fn unknown_fields_and_bad_namespaces_fail() {
        Config::reset_for_tests();

        let err = Config::init_from_toml("[pack]\nflavor = \"x\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::CannotParseToml(_)));

        let err = Config::init_from_toml("[pack]\nnamespace = \"Bad Space\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ConfigSchema(_)));
        assert!(Config::try_get().is_none());
    }

    #[test]
    fn to_toml_round_trips_values() {
        Config::reset_for_tests();
        Config::init_from_toml("[pack]\nnamespace = \"demo\"\n").unwrap();

        let text = Config::to_toml().unwrap();
        assert!(text.contains("namespace = \"demo\""));

        Config::reset_for_tests();
    }
}
