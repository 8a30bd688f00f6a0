//! Names the transform recognizes and emits.
//!
//! The defaults match the SpacetimeDB module runtime: handlers are written
//! against `useReducer` from `spacetimedb/composable` and rewritten into
//! `registerReducer` / `registerType` calls from `spacetimedb`.

use serde::{Deserialize, Serialize};

/// Configuration for one [`Transformer`](crate::Transformer).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Callee recognized as a typed reducer registration.
    pub source_entry_point: String,
    /// Callee emitted for rewritten reducer registrations.
    pub register_reducer: String,
    /// Callee emitted for rewritten type aliases.
    pub register_type: String,
    /// Identifier of the runtime type namespace (`type.u32`, `type.array(..)`).
    pub type_namespace: String,
    /// Module that provides the runtime API.
    pub runtime_module: String,
    /// Module of compile-time-only placeholder types. Its imports are dropped.
    pub placeholder_module: String,
    /// Warn when a registration handler has no parameter annotations at all.
    pub warn_untyped_reducers: bool,
    /// Embed the original text as `sourcesContent` in emitted source maps.
    pub source_map_content: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_entry_point: "useReducer".to_owned(),
            register_reducer: "registerReducer".to_owned(),
            register_type: "registerType".to_owned(),
            type_namespace: "type".to_owned(),
            runtime_module: "spacetimedb".to_owned(),
            placeholder_module: "spacetimedb/composable".to_owned(),
            warn_untyped_reducers: true,
            source_map_content: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_entry_point(mut self, name: impl Into<String>) -> Self {
        self.source_entry_point = name.into();
        self
    }

    pub fn with_register_reducer(mut self, name: impl Into<String>) -> Self {
        self.register_reducer = name.into();
        self
    }

    pub fn with_register_type(mut self, name: impl Into<String>) -> Self {
        self.register_type = name.into();
        self
    }

    pub fn with_type_namespace(mut self, name: impl Into<String>) -> Self {
        self.type_namespace = name.into();
        self
    }

    pub fn with_runtime_module(mut self, module: impl Into<String>) -> Self {
        self.runtime_module = module.into();
        self
    }

    pub fn with_placeholder_module(mut self, module: impl Into<String>) -> Self {
        self.placeholder_module = module.into();
        self
    }

    pub fn with_untyped_warnings(mut self, value: bool) -> Self {
        self.warn_untyped_reducers = value;
        self
    }

    pub fn with_source_map_content(mut self, value: bool) -> Self {
        self.source_map_content = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_spacetimedb() {
        let config = Config::default();
        assert_eq!(config.source_entry_point, "useReducer");
        assert_eq!(config.runtime_module, "spacetimedb");
        assert_eq!(config.placeholder_module, "spacetimedb/composable");
        assert!(config.warn_untyped_reducers);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "runtimeModule": "@acme/runtime", "typeNamespace": "t" }"#)
                .unwrap();
        assert_eq!(config.runtime_module, "@acme/runtime");
        assert_eq!(config.type_namespace, "t");
        assert_eq!(config.register_reducer, "registerReducer");
    }

    #[test]
    fn builder_setters() {
        let config = Config::new()
            .with_source_entry_point("defineReducer")
            .with_untyped_warnings(false);
        assert_eq!(config.source_entry_point, "defineReducer");
        assert!(!config.warn_untyped_reducers);
    }
}
