//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::config_loader::ConfigArgs;
use crate::commands::scalars::ScalarsArgs;
use crate::commands::transform::TransformArgs;

/// Config flags shared by `transform` and `check`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConfigParams {
    pub config_file: Option<PathBuf>,
    pub entry_point: Option<String>,
    pub register_reducer: Option<String>,
    pub register_type: Option<String>,
    pub namespace: Option<String>,
    pub runtime_module: Option<String>,
    pub placeholder_module: Option<String>,
    pub no_untyped_warnings: bool,
}

impl ConfigParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config_file: m.get_one::<PathBuf>("config").cloned(),
            entry_point: m.get_one::<String>("entry_point").cloned(),
            register_reducer: m.get_one::<String>("register_reducer").cloned(),
            register_type: m.get_one::<String>("register_type").cloned(),
            namespace: m.get_one::<String>("namespace").cloned(),
            runtime_module: m.get_one::<String>("runtime_module").cloned(),
            placeholder_module: m.get_one::<String>("placeholder_module").cloned(),
            no_untyped_warnings: m.get_flag("no_untyped_warnings"),
        }
    }
}

impl From<ConfigParams> for ConfigArgs {
    fn from(p: ConfigParams) -> Self {
        Self {
            config_file: p.config_file,
            entry_point: p.entry_point,
            register_reducer: p.register_reducer,
            register_type: p.register_type,
            namespace: p.namespace,
            runtime_module: p.runtime_module,
            placeholder_module: p.placeholder_module,
            untyped_warnings: if p.no_untyped_warnings { Some(false) } else { None },
            sources_content: None,
        }
    }
}

pub struct TransformParams {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    pub source_map: bool,
    pub no_sources_content: bool,
    pub color: ColorChoice,
    pub config: ConfigParams,
}

impl TransformParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m.get_one::<PathBuf>("file").cloned().unwrap_or_default(),
            output: m.get_one::<PathBuf>("output").cloned(),
            source_map: m.get_flag("source_map"),
            no_sources_content: m.get_flag("no_sources_content"),
            color: parse_color(m),
            config: ConfigParams::from_matches(m),
        }
    }
}

impl From<TransformParams> for TransformArgs {
    fn from(p: TransformParams) -> Self {
        let mut config: ConfigArgs = p.config.into();
        if p.no_sources_content {
            config.sources_content = Some(false);
        }
        Self {
            file: p.file,
            output: p.output,
            source_map: p.source_map,
            color: p.color.should_colorize(),
            config,
        }
    }
}

pub struct CheckParams {
    pub files: Vec<PathBuf>,
    pub strict: bool,
    pub color: ColorChoice,
    pub config: ConfigParams,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: m
                .get_many::<PathBuf>("files")
                .map(|files| files.cloned().collect())
                .unwrap_or_default(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
            config: ConfigParams::from_matches(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            files: p.files,
            strict: p.strict,
            color: p.color.should_colorize(),
            config: p.config.into(),
        }
    }
}

pub struct ScalarsParams {
    pub namespace: Option<String>,
}

impl ScalarsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            namespace: m.get_one::<String>("namespace").cloned(),
        }
    }
}

impl From<ScalarsParams> for ScalarsArgs {
    fn from(p: ScalarsParams) -> Self {
        Self {
            namespace: p.namespace,
        }
    }
}

pub struct LangsParams;

impl LangsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
