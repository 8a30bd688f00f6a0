//! Builds a [`Config`] from an optional JSON file plus flag overrides.
//!
//! Flags win over the file; the file wins over defaults. The JSON file uses
//! the camelCase field names of [`Config`] and may set any subset of them.

use std::path::PathBuf;

use tyreflect_lib::Config;

use super::CommandError;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigArgs {
    pub config_file: Option<PathBuf>,
    pub entry_point: Option<String>,
    pub register_reducer: Option<String>,
    pub register_type: Option<String>,
    pub namespace: Option<String>,
    pub runtime_module: Option<String>,
    pub placeholder_module: Option<String>,
    pub untyped_warnings: Option<bool>,
    pub sources_content: Option<bool>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<Config, CommandError> {
        let base = match &self.config_file {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| CommandError::Read {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&text).map_err(|source| CommandError::Config {
                    path: path.clone(),
                    source,
                })?
            }
            None => Config::default(),
        };
        tracing::debug!(file = ?self.config_file, "loaded config");
        Ok(self.apply(base))
    }

    fn apply(&self, mut config: Config) -> Config {
        if let Some(name) = &self.entry_point {
            config = config.with_source_entry_point(name);
        }
        if let Some(name) = &self.register_reducer {
            config = config.with_register_reducer(name);
        }
        if let Some(name) = &self.register_type {
            config = config.with_register_type(name);
        }
        if let Some(name) = &self.namespace {
            config = config.with_type_namespace(name);
        }
        if let Some(module) = &self.runtime_module {
            config = config.with_runtime_module(module);
        }
        if let Some(module) = &self.placeholder_module {
            config = config.with_placeholder_module(module);
        }
        if let Some(value) = self.untyped_warnings {
            config = config.with_untyped_warnings(value);
        }
        if let Some(value) = self.sources_content {
            config = config.with_source_map_content(value);
        }
        config
    }
}
