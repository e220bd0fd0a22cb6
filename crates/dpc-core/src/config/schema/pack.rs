use super::{ConfigSchemaError, Validate};
use dpc_types::is_valid_namespace;
use serde::{Deserialize, Serialize};

mod defaults {
    pub fn name() -> String {
        "Untitled Pack".to_string()
    }

    pub fn namespace() -> String {
        "dpc".to_string()
    }
}

///
/// PackConfig
///
/// Identity of the pack the scripts belong to. `dev` keeps development-only
/// commands (such as `Log`) in rendered output.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PackConfig {
    #[serde(default = "defaults::name")]
    pub name: String,

    #[serde(default = "defaults::namespace")]
    pub namespace: String,

    #[serde(default)]
    pub dev: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            name: defaults::name(),
            namespace: defaults::namespace(),
            dev: false,
        }
    }
}

impl Validate for PackConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.name.trim().is_empty() {
            return Err(ConfigSchemaError::ValidationError(
                "pack.name must not be empty".to_string(),
            ));
        }
        if !is_valid_namespace(&self.namespace) {
            return Err(ConfigSchemaError::ValidationError(format!(
                "pack.namespace '{}' allows only [a-z0-9_.-]",
                self.namespace
            )));
        }

        Ok(())
    }
}
