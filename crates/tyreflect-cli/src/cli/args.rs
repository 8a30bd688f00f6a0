//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so commands can compose the same
//! definitions.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input file (positional).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("TypeScript source file")
}

/// One or more input files (positional).
pub fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILE")
        .required(true)
        .num_args(1..)
        .value_parser(value_parser!(PathBuf))
        .help("TypeScript source files")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file (default: stdout)")
}

/// Write `<OUTPUT>.map` next to the output (--source-map).
pub fn source_map_arg() -> Arg {
    Arg::new("source_map")
        .long("source-map")
        .action(ArgAction::SetTrue)
        .requires("output")
        .help("Also write a source map to <OUTPUT>.map")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log rewrites and skipped forms (-vv for trace)")
}

/// JSON config file (--config).
pub fn config_file_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file with transform settings")
}

/// Callee recognized as a typed registration (--entry-point).
pub fn entry_point_arg() -> Arg {
    Arg::new("entry_point")
        .long("entry-point")
        .value_name("NAME")
        .help("Callee to rewrite [default: useReducer]")
}

/// Callee emitted for reducers (--register-reducer).
pub fn register_reducer_arg() -> Arg {
    Arg::new("register_reducer")
        .long("register-reducer")
        .value_name("NAME")
        .help("Emitted reducer registration callee [default: registerReducer]")
}

/// Callee emitted for type aliases (--register-type).
pub fn register_type_arg() -> Arg {
    Arg::new("register_type")
        .long("register-type")
        .value_name("NAME")
        .help("Emitted type registration callee [default: registerType]")
}

/// Runtime type namespace (--namespace).
pub fn namespace_arg() -> Arg {
    Arg::new("namespace")
        .long("namespace")
        .value_name("IDENT")
        .help("Runtime type namespace identifier [default: type]")
}

/// Runtime module (--runtime-module).
pub fn runtime_module_arg() -> Arg {
    Arg::new("runtime_module")
        .long("runtime-module")
        .value_name("MODULE")
        .help("Module providing the runtime API [default: spacetimedb]")
}

/// Placeholder type module (--placeholder-module).
pub fn placeholder_module_arg() -> Arg {
    Arg::new("placeholder_module")
        .long("placeholder-module")
        .value_name("MODULE")
        .help("Module of placeholder types to drop [default: spacetimedb/composable]")
}

/// Silence untyped handler warnings (--no-untyped-warnings).
pub fn no_untyped_warnings_arg() -> Arg {
    Arg::new("no_untyped_warnings")
        .long("no-untyped-warnings")
        .action(ArgAction::SetTrue)
        .help("Don't warn about registrations with untyped handlers")
}

/// Omit sourcesContent from maps (--no-sources-content).
pub fn no_sources_content_arg() -> Arg {
    Arg::new("no_sources_content")
        .long("no-sources-content")
        .action(ArgAction::SetTrue)
        .help("Don't embed the original text in source maps")
}
